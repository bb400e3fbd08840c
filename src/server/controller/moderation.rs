use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        event::{EventDto, ModerationSummaryDto},
    },
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::event::EventService, util::time::today,
    },
};

pub static MODERATION_TAG: &str = "moderation";

/// Get the moderation dashboard
#[utoipa::path(
    get,
    path = "/api/moderation/summary",
    tag = MODERATION_TAG,
    responses(
        (status = 200, description = "Event counts, pending queue and recent events", body = ModerationSummaryDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not a moderator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_moderation_summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let summary = EventService::new(&state.db)
        .moderation_summary(&user, today())
        .await?;

    Ok((StatusCode::OK, Json(summary)))
}

/// Set the lifecycle status of an event
///
/// `status` is one of `pending`, `approved` or `rejected`.
#[utoipa::path(
    put,
    path = "/api/moderation/events/{event_id}/status/{status}",
    tag = MODERATION_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID"),
        ("status" = String, Path, description = "Target status")
    ),
    responses(
        (status = 200, description = "Updated event", body = EventDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not a moderator", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_event_status(
    State(state): State<AppState>,
    session: Session,
    Path((event_id, status)): Path<(i32, String)>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let event = EventService::new(&state.db)
        .set_status(&user, event_id, &status, today())
        .await?;

    Ok((StatusCode::OK, Json(event)))
}
