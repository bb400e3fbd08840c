//! Server application core modules.
//!
//! This module contains all server-side functionality for the Barrio application: HTTP routing,
//! session handling, database operations and the event registration workflow that keeps seat
//! accounting consistent with each event's capacity.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
