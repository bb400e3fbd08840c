//! Factory functions for generating mock database models.
//!
//! These are in-memory model instances that don't require database interaction. Override
//! individual fields with struct update syntax:
//!
//! ```ignore
//! let event = EventModel { capacity: 10, ..factory::event(user.id) };
//! ```

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{EventStatus, Role};

use crate::model::{EventModel, RegistrationModel, UserModel};

/// Create an active resident without a birth date.
pub fn user(username: &str) -> UserModel {
    UserModel {
        id: 1,
        username: username.to_string(),
        email: format!("{}@example.com", username),
        role: Role::Resident,
        birth_date: None,
        is_active: true,
        created_at: Utc::now().naive_utc(),
    }
}

/// Create an approved, undated, free event with unlimited capacity.
///
/// # Arguments
/// - `created_by` - ID of the submitting user
pub fn event(created_by: i32) -> EventModel {
    let now = Utc::now().naive_utc();
    EventModel {
        id: 1,
        title: "Neighborhood clean-up".to_string(),
        description: "Bring gloves, we provide the bags.".to_string(),
        status: EventStatus::Approved,
        created_by,
        address: "Main Square".to_string(),
        locality: Some("Providencia".to_string()),
        venue: Some("Community center".to_string()),
        start_date: None,
        end_date: None,
        start_time: None,
        end_time: None,
        capacity: 0,
        price: 0,
        adults_only: false,
        created_at: now,
        updated_at: now,
        status_changed_at: None,
    }
}

pub fn registration(event_id: i32, user_id: i32, quantity: i32) -> RegistrationModel {
    RegistrationModel {
        event_id,
        user_id,
        quantity,
        created_at: Utc::now().naive_utc(),
    }
}

/// Birth date of someone who turns `years` old exactly on `today`.
pub fn birth_date_for_age(today: NaiveDate, years: u32) -> NaiveDate {
    today
        .checked_sub_months(chrono::Months::new(12 * years))
        .unwrap_or(today)
}
