//! Utility functions and helpers for server operations.
//!
//! Date arithmetic shared by the registration workflow and the event DTO conversions. All
//! functions take `today` explicitly, only [`time::today`] reads the clock.

pub mod time;
