use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        registration::{AttendanceQuery, AttendanceQuoteDto, AttendanceRequestDto, RegistrationDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::{error_response, Error},
        model::app::AppState,
        service::registration::{validate_contact, RegistrationService, MIN_QUANTITY},
        util::time::today,
    },
};

pub static REGISTRATION_TAG: &str = "registration";

/// Preview an attendance request
///
/// Returns the quantity that would be stored after clamping, the seats left and the total
/// cost, without registering.
#[utoipa::path(
    get,
    path = "/api/events/{event_id}/attendance",
    tag = REGISTRATION_TAG,
    params(("event_id" = i32, Path, description = "Event ID"), AttendanceQuery),
    responses(
        (status = 200, description = "Checkout quote", body = AttendanceQuoteDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Adults only event", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Event not open for registration", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendance_quote(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
    Query(query): Query<AttendanceQuery>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let quote = RegistrationService::new(&state.db)
        .quote(
            event_id,
            &user,
            query.quantity.unwrap_or(MIN_QUANTITY),
            today(),
        )
        .await?;

    Ok((StatusCode::OK, Json(quote)))
}

/// Request attendance to an event
///
/// Creates the user's registration or overwrites its quantity. The quantity is clamped to
/// 1 to 5 seats and to the seats left by other attendees.
#[utoipa::path(
    post,
    path = "/api/events/{event_id}/attendance",
    tag = REGISTRATION_TAG,
    params(("event_id" = i32, Path, description = "Event ID")),
    request_body = AttendanceRequestDto,
    responses(
        (status = 200, description = "Registration stored", body = RegistrationDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Adults only event", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Event not open for registration or no seats left", body = ErrorDto),
        (status = 422, description = "Invalid contact details", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_attendance(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
    Json(form): Json<AttendanceRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    validate_contact(&form)?;

    let registration = RegistrationService::new(&state.db)
        .request_attendance(
            event_id,
            user.id,
            form.quantity.unwrap_or(MIN_QUANTITY),
            today(),
        )
        .await?;

    Ok((StatusCode::OK, Json(registration)))
}

/// Get own registration for an event
#[utoipa::path(
    get,
    path = "/api/events/{event_id}/attendance/mine",
    tag = REGISTRATION_TAG,
    params(("event_id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "The user's registration with total cost", body = RegistrationDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Event not found or user not registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_registration(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<Response, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let registration = RegistrationService::new(&state.db)
        .get_registration(event_id, user.id)
        .await?;

    Ok(match registration {
        Some(registration) => (StatusCode::OK, Json(registration)).into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            "You have no registration for this event",
        ),
    })
}
