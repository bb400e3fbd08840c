use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::event::EventDto;

/// Checkout form submitted when requesting attendance
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AttendanceRequestDto {
    /// Requested seats, clamped to 1..=5 and to remaining capacity
    pub quantity: Option<i32>,
    pub name: String,
    pub email: String,
    pub email_confirmation: String,
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::IntoParams)]
pub struct AttendanceQuery {
    pub quantity: Option<i32>,
}

/// Preview of what an attendance request would store
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AttendanceQuoteDto {
    pub event_id: i32,
    pub quantity: i32,
    pub unit_price: i64,
    pub total_cost: i64,
    /// Seats left for this user, `None` when the event has no seat limit
    pub remaining: Option<i64>,
    pub already_registered: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegistrationDto {
    pub event_id: i32,
    pub user_id: i32,
    pub quantity: i32,
    pub unit_price: i64,
    pub total_cost: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserRegistrationDto {
    pub registration: RegistrationDto,
    pub event: EventDto,
}
