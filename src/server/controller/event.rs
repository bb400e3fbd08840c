use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        event::{AvailabilityDto, EventDetailDto, EventDto, EventFormDto, EventListQuery},
    },
    server::{
        controller::util::get_user::{get_optional_user_from_session, get_user_from_session},
        error::Error,
        model::app::AppState,
        service::event::EventService,
        util::time::today,
    },
};

pub static EVENT_TAG: &str = "event";

/// List approved events
///
/// Ordered by start date, start time and title.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(EventListQuery),
    responses(
        (status = 200, description = "Approved events matching the filters", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_events(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<EventListQuery>,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_optional_user_from_session(&state, &session).await?;

    let events = EventService::new(&state.db)
        .list(viewer.as_ref(), query, today())
        .await?;

    Ok((StatusCode::OK, Json(events)))
}

/// List distinct event localities
#[utoipa::path(
    get,
    path = "/api/events/localities",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Localities used by events", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_localities(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let localities = EventService::new(&state.db).localities().await?;

    Ok((StatusCode::OK, Json(localities)))
}

/// Submit an event for review
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = EventFormDto,
    responses(
        (status = 201, description = "Event stored as pending", body = EventDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 422, description = "Invalid form", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<EventFormDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let event = EventService::new(&state.db)
        .create(&user, form, today())
        .await?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// Get event detail
///
/// Events that are not approved are only visible to moderators.
#[utoipa::path(
    get,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(("event_id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event with availability and the viewer's registration", body = EventDetailDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_optional_user_from_session(&state, &session).await?;

    let detail = EventService::new(&state.db)
        .detail(viewer.as_ref(), event_id, today())
        .await?;

    Ok((StatusCode::OK, Json(detail)))
}

/// Edit an event
///
/// Allowed to the event's creator and to moderators.
#[utoipa::path(
    put,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(("event_id" = i32, Path, description = "Event ID")),
    request_body = EventFormDto,
    responses(
        (status = 200, description = "Updated event", body = EventDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Neither creator nor moderator", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 422, description = "Invalid form", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
    Json(form): Json<EventFormDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let event = EventService::new(&state.db)
        .update(&user, event_id, form, today())
        .await?;

    Ok((StatusCode::OK, Json(event)))
}

/// Delete an event and its registrations
#[utoipa::path(
    delete,
    path = "/api/events/{event_id}",
    tag = EVENT_TAG,
    params(("event_id" = i32, Path, description = "Event ID")),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Neither creator nor moderator", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    EventService::new(&state.db).delete(&user, event_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get seat availability of an event
#[utoipa::path(
    get,
    path = "/api/events/{event_id}/availability",
    tag = EVENT_TAG,
    params(("event_id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Occupied and available seats", body = AvailabilityDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_availability(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let viewer = get_optional_user_from_session(&state, &session).await?;

    let availability = EventService::new(&state.db)
        .availability(viewer.as_ref(), event_id)
        .await?;

    Ok((StatusCode::OK, Json(availability)))
}
