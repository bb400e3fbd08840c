//! Seat occupancy derived from the registration ledger.
//!
//! Nothing is cached, every read sums the ledger again.

use sea_orm::{ConnectionTrait, DbErr};

use crate::{
    model::event::AvailabilityDto,
    server::{data::registration::RegistrationRepository, model::db::EventModel},
};

/// Seats left on an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// Capacity 0, no seat limit
    Unlimited,
    /// Seats left, never negative
    Remaining(i64),
}

impl Availability {
    /// Never full when unlimited, otherwise full once no seat remains.
    pub fn is_full(&self) -> bool {
        match self {
            Self::Unlimited => false,
            Self::Remaining(seats) => *seats <= 0,
        }
    }

    /// Remaining seats, `None` when unlimited.
    pub fn remaining(&self) -> Option<i64> {
        match self {
            Self::Unlimited => None,
            Self::Remaining(seats) => Some(*seats),
        }
    }
}

/// Seats left given a capacity and the seats already claimed.
///
/// A capacity of 0 means unlimited.
pub fn available(capacity: i32, occupied: i64) -> Availability {
    if capacity == 0 {
        return Availability::Unlimited;
    }

    Availability::Remaining((i64::from(capacity) - occupied).max(0))
}

pub struct CapacityService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CapacityService<'a, C> {
    /// Creates a new instance of [`CapacityService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Seats claimed across all registrations of an event.
    pub async fn occupied(&self, event_id: i32) -> Result<i64, DbErr> {
        RegistrationRepository::new(self.db).occupied(event_id).await
    }

    /// Occupancy summary of an event.
    pub async fn availability(&self, event: &EventModel) -> Result<AvailabilityDto, DbErr> {
        let occupied = self.occupied(event.id).await?;
        let availability = available(event.capacity, occupied);

        Ok(AvailabilityDto {
            event_id: event.id,
            occupied,
            available: availability.remaining(),
            is_full: availability.is_full(),
        })
    }
}
