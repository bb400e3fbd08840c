//! Service layer for business logic.
//!
//! Services validate input, enforce permissions and coordinate repositories. The capacity and
//! registration services hold the seat accounting, the event service the lifecycle and listing
//! rules, the user service account administration.

pub mod capacity;
pub mod event;
pub mod registration;
pub mod retry;
pub mod user;
