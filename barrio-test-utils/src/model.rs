//! Database model type aliases used by fixtures and factories.

pub type UserModel = entity::barrio_user::Model;
pub type EventModel = entity::barrio_event::Model;
pub type RegistrationModel = entity::barrio_registration::Model;
