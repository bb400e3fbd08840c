//! Session data models and utilities.
//!
//! Type-safe wrappers for session data stored with tower-sessions (Redis-backed in production).
//! Login itself happens elsewhere, Barrio only reads the user ID it leaves in the session.

pub mod user;
