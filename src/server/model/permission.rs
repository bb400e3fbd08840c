//! Role based permissions.
//!
//! Every role maps to a fixed set of capabilities and handlers ask [`can`] instead of comparing
//! roles directly.

use entity::sea_orm_active_enums::Role;
use serde::{Deserialize, Serialize};

use crate::server::model::db::{EventModel, UserModel};

/// Something a user may be allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Submit new events for review
    CreateEvent,
    /// Approve, reject, edit or delete any event
    ModerateEvent,
    /// Create and edit user accounts
    ManageUsers,
}

/// Capabilities granted to a role.
pub fn capabilities(role: Role) -> &'static [Capability] {
    match role {
        Role::Resident => &[Capability::CreateEvent],
        Role::Moderator => &[Capability::CreateEvent, Capability::ModerateEvent],
        Role::Administrator => &[
            Capability::CreateEvent,
            Capability::ModerateEvent,
            Capability::ManageUsers,
        ],
    }
}

/// Returns true when `role` grants `capability`.
pub fn can(role: Role, capability: Capability) -> bool {
    capabilities(role).contains(&capability)
}

/// Creators may edit and delete their own events, moderators any event.
pub fn can_manage_event(user: &UserModel, event: &EventModel) -> bool {
    event.created_by == user.id || can(user.role, Capability::ModerateEvent)
}
