//! Request and response types shared by the HTTP API.

pub mod api;
pub mod event;
pub mod registration;
pub mod user;
