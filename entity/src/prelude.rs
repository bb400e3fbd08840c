pub use super::barrio_event::Entity as BarrioEvent;
pub use super::barrio_registration::Entity as BarrioRegistration;
pub use super::barrio_user::Entity as BarrioUser;
