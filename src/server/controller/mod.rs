//! HTTP controller endpoints for the Barrio web API.
//!
//! Axum handlers for events, attendance, moderation and user administration. Controllers
//! resolve the session user, read the local date, call services and map results to HTTP
//! responses. Routes are documented with utoipa.

pub mod admin;
pub mod event;
pub mod moderation;
pub mod registration;
pub mod user;
pub mod util;
