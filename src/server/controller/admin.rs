use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::{error_response, Error},
        model::app::AppState,
        service::user::UserService,
    },
};

pub static ADMIN_TAG: &str = "admin";

/// List all users ordered by username
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let actor = get_user_from_session(&state, &session).await?;

    let users = UserService::new(&state.db).list_users(&actor).await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Create a user account
#[utoipa::path(
    post,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 422, description = "Invalid or taken username, invalid email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Json(user): Json<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let actor = get_user_from_session(&state, &session).await?;

    let user = UserService::new(&state.db).create_user(&actor, user).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Update a user's email, role, birth date and active flag
#[utoipa::path(
    put,
    path = "/api/admin/users/{user_id}",
    tag = ADMIN_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an administrator", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 422, description = "Invalid email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(changes): Json<UpdateUserDto>,
) -> Result<Response, Error> {
    let actor = get_user_from_session(&state, &session).await?;

    let updated = UserService::new(&state.db)
        .update_user(&actor, user_id, changes)
        .await?;

    Ok(match updated {
        Some(user) => (StatusCode::OK, Json(user)).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "User not found"),
    })
}
