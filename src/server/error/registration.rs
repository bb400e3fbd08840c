//! Expected rejections of an attendance request.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Why an event does not accept registrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotJoinable {
    /// The event is pending or rejected.
    NotApproved,
    /// The event's end date (or start date without one) is before today.
    Concluded,
}

/// Why an adults-only event refused the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeRestriction {
    /// The user has no birth date on file.
    Unverified,
    /// The user is younger than 18.
    Underage,
}

impl fmt::Display for NotJoinable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotApproved => write!(f, "not approved"),
            Self::Concluded => write!(f, "concluded"),
        }
    }
}

impl fmt::Display for AgeRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unverified => write!(f, "birth date unknown"),
            Self::Underage => write!(f, "under 18"),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Event ID {event_id:?} does not accept registrations: {reason}")]
    EventNotJoinable { event_id: i32, reason: NotJoinable },
    #[error("Event ID {event_id:?} is adults only: {reason}")]
    AgeRestricted {
        event_id: i32,
        reason: AgeRestriction,
    },
    #[error("Event ID {event_id:?} has no capacity remaining")]
    NoCapacityRemaining { event_id: i32 },
}

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        tracing::debug!("Attendance request rejected: {}", self);

        match self {
            Self::EventNotJoinable {
                reason: NotJoinable::NotApproved,
                ..
            } => error_response(StatusCode::CONFLICT, "This event is not open for registration"),
            Self::EventNotJoinable {
                reason: NotJoinable::Concluded,
                ..
            } => error_response(StatusCode::CONFLICT, "This event has already finished"),
            Self::AgeRestricted {
                reason: AgeRestriction::Unverified,
                ..
            } => error_response(
                StatusCode::FORBIDDEN,
                "This event is for adults only, add your birth date to your profile to register",
            ),
            Self::AgeRestricted {
                reason: AgeRestriction::Underage,
                ..
            } => error_response(
                StatusCode::FORBIDDEN,
                "This event is for adults only (18+)",
            ),
            Self::NoCapacityRemaining { .. } => {
                error_response(StatusCode::CONFLICT, "No seats remain for this event")
            }
        }
    }
}
