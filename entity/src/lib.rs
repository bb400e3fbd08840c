//! SeaORM entity definitions for the Barrio database schema.

pub mod prelude;

pub mod barrio_event;
pub mod barrio_registration;
pub mod barrio_user;
pub mod sea_orm_active_enums;
