//! Date helpers: local calendar day, age, event conclusion and timing badges.

use chrono::{Datelike, Local, NaiveDate};

use crate::model::event::{EventTiming, TimeState};

/// Minimum age for adults-only events
pub const ADULT_AGE: i32 = 18;

/// Today's date in the process' local time zone.
///
/// Deployments set `TZ` to the neighborhood's zone so "today" matches the residents' calendar.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole years between `birth_date` and `today`.
///
/// The year difference, minus one when the birthday hasn't come yet this year. Someone born on
/// February 29th becomes a year older on March 1st in non-leap years.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - birth_date.year();

    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years - 1
    } else {
        years
    }
}

/// Returns true when the event's last day is strictly before `today`.
///
/// The last day is the end date, or the start date when there is no end date. Events with
/// neither date never conclude.
pub fn is_concluded(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    today: NaiveDate,
) -> bool {
    match end_date.or(start_date) {
        Some(last_day) => last_day < today,
        None => false,
    }
}

/// Days from `today` until `start_date`, negative once it has passed.
fn days_until(start_date: NaiveDate, today: NaiveDate) -> i64 {
    (start_date - today).num_days()
}

/// Badge describing how soon the event starts.
pub fn event_timing(start_date: Option<NaiveDate>, today: NaiveDate) -> EventTiming {
    let Some(start_date) = start_date else {
        return EventTiming::Undated;
    };

    match days_until(start_date, today) {
        d if d < 0 => EventTiming::Past,
        0 => EventTiming::Today,
        1..=3 => EventTiming::VerySoon,
        4..=7 => EventTiming::ThisWeek,
        _ => EventTiming::Later,
    }
}

/// Coarse state used to color event cards.
pub fn time_state(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    today: NaiveDate,
) -> TimeState {
    if is_concluded(start_date, end_date, today) {
        return TimeState::Finished;
    }

    match start_date.map(|start| days_until(start, today)) {
        Some(0) => TimeState::Today,
        Some(1..=3) => TimeState::Soon,
        _ => TimeState::Normal,
    }
}
