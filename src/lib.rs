//! Barrio: neighborhood community events.
//!
//! Residents submit events, moderators approve or reject them, and users register seats for
//! approved events within each event's capacity.

pub mod model;
pub mod server;
