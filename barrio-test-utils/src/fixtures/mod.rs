//! Test fixture modules for database row creation.
//!
//! - `user` - Barrio user accounts
//! - `event` - community events
//! - `registration` - seat ledger entries
//! - `factory` - detached models with standard test values, no database access

pub mod event;
pub mod factory;
pub mod registration;
pub mod user;
