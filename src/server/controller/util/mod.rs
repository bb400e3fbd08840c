//! Utility functions for controller request handling.
//!
//! Resolves the signed-in user from the session for protected and public endpoints.

pub mod get_user;
