use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Event ID {0:?} not found")]
    NotFound(i32),
    /// Lifecycle override requested with a status outside pending/approved/rejected
    #[error("Invalid event status: {0:?}")]
    InvalidLifecycleTransition(String),
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Event not found"),
            Self::InvalidLifecycleTransition(status) => error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid event status: {}", status),
            ),
        }
    }
}
