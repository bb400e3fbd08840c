use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    /// The signed-in user is not allowed to perform `action`.
    #[error("User ID {user_id:?} is not allowed to {action}")]
    Forbidden { user_id: i32, action: String },
}

impl AuthError {
    pub fn forbidden(user_id: i32, action: impl Into<String>) -> Self {
        Self::Forbidden {
            user_id,
            action: action.into(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession => {
                error_response(StatusCode::UNAUTHORIZED, "You need to sign in first")
            }
            Self::UserNotInDatabase(_) => error_response(StatusCode::NOT_FOUND, "User not found"),
            Self::Forbidden { .. } => error_response(
                StatusCode::FORBIDDEN,
                "You don't have permission to access this section",
            ),
        }
    }
}
