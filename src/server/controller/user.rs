use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, registration::UserRegistrationDto},
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::registration::RegistrationService, util::time::today,
    },
};

pub static USER_TAG: &str = "user";

/// Get the registrations of the signed-in user, newest first
#[utoipa::path(
    get,
    path = "/api/user/registrations",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Registrations with their events", body = Vec<UserRegistrationDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_registrations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let registrations = RegistrationService::new(&state.db)
        .list_user_registrations(user.id, today())
        .await?;

    Ok((StatusCode::OK, Json(registrations)))
}
