//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! database model type aliases, session data structures and the role permission model.

pub mod app;
pub mod db;
pub mod permission;
pub mod session;
