use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use entity::sea_orm_active_enums::EventStatus;
use serde::{Deserialize, Serialize};

use crate::model::registration::RegistrationDto;

/// How soon an event starts relative to today, used for the listing badge
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventTiming {
    Undated,
    Past,
    Today,
    /// Starts within the next 3 days
    VerySoon,
    /// Starts within the next 7 days
    ThisWeek,
    Later,
}

/// Coarse time state used to color event cards
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimeState {
    Finished,
    Today,
    Soon,
    Normal,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    #[schema(value_type = String, example = "approved")]
    pub status: EventStatus,
    pub created_by: i32,
    pub address: String,
    pub locality: Option<String>,
    pub venue: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, example = "18:30:00")]
    pub start_time: Option<NaiveTime>,
    #[schema(value_type = Option<String>, example = "20:00:00")]
    pub end_time: Option<NaiveTime>,
    /// Total seats, 0 means unlimited
    pub capacity: i32,
    pub price: i64,
    pub is_free: bool,
    pub adults_only: bool,
    pub created_at: NaiveDateTime,
    pub timing: EventTiming,
    pub time_state: TimeState,
}

/// Event submission and edit form
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EventFormDto {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub address: String,
    pub locality: Option<String>,
    pub venue: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[schema(value_type = Option<String>, example = "18:30:00")]
    pub start_time: Option<NaiveTime>,
    #[schema(value_type = Option<String>, example = "20:00:00")]
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub capacity: i32,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub adults_only: bool,
}

/// Seat occupancy of an event
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AvailabilityDto {
    pub event_id: i32,
    pub occupied: i64,
    /// Remaining seats, `None` when the event has no seat limit
    pub available: Option<i64>,
    pub is_full: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EventDetailDto {
    pub event: EventDto,
    pub availability: AvailabilityDto,
    /// The current user's registration, if any
    pub registration: Option<RegistrationDto>,
    /// Whether the current user passes the adults-only check
    pub eligible_by_age: bool,
}

/// Filters accepted by the event listing
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::IntoParams)]
pub struct EventListQuery {
    /// Matches title, description, locality or venue
    pub q: Option<String>,
    pub locality: Option<String>,
    /// Only events the current user registered for
    pub mine: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ModerationSummaryDto {
    pub total_events: u64,
    pub approved_events: u64,
    pub rejected_events: u64,
    pub pending_events: Vec<EventDto>,
    pub recent_events: Vec<EventDto>,
}
