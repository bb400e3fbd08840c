//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, so signatures don't import from the `entity` crate directly.

/// Type alias for Barrio user database model.
///
/// # Fields (from `entity::barrio_user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `username` - Unique login name
/// - `email` - Contact email
/// - `role` - Resident, moderator or administrator
/// - `birth_date` - Used for adults-only events (nullable)
/// - `is_active` - Inactive users are treated as signed out
/// - `created_at` - Timestamp when the user account was created
pub type UserModel = entity::barrio_user::Model;

/// Type alias for community event database model.
///
/// `capacity` of 0 means unlimited seats and `price` of 0 means a free event.
pub type EventModel = entity::barrio_event::Model;

/// Type alias for registration ledger database model.
///
/// One row per (event, user) pair holding the number of seats claimed (1 to 5).
pub type RegistrationModel = entity::barrio_registration::Model;
