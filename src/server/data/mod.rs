//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries per table and are generic over [`sea_orm::ConnectionTrait`]
//! so the same code runs on a pooled connection or inside a transaction.

pub mod event;
pub mod registration;
pub mod user;
