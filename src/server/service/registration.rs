//! Registration workflow: validates an attendance request and writes the seat ledger.
//!
//! The pure policy functions ([`check_joinable`], [`check_age`], [`plan_quantity`]) are shared
//! by the read-only checkout quote and by [`RegistrationService::request_attendance`], which runs
//! them again inside the write transaction.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::registration::{AttendanceQuoteDto, AttendanceRequestDto, RegistrationDto, UserRegistrationDto},
    server::{
        data::{event::EventRepository, registration::RegistrationRepository, user::UserRepository},
        error::{
            auth::AuthError,
            event::EventError,
            registration::{AgeRestriction, NotJoinable, RegistrationError},
            validation::ValidationError,
            Error,
        },
        model::db::{EventModel, RegistrationModel, UserModel},
        service::{capacity::available, event::event_dto, retry::RetryContext},
        util::time::{age_on, is_concluded, ADULT_AGE},
    },
};

/// Fewest seats a single registration may claim
pub const MIN_QUANTITY: i32 = 1;
/// Most seats a single registration may claim
pub const MAX_QUANTITY: i32 = 5;

const MAX_NAME_LEN: usize = 150;
const MAX_PHONE_LEN: usize = 30;

/// Rejects events that are not approved or already concluded, in that order.
pub fn check_joinable(event: &EventModel, today: NaiveDate) -> Result<(), RegistrationError> {
    if event.status != entity::sea_orm_active_enums::EventStatus::Approved {
        return Err(RegistrationError::EventNotJoinable {
            event_id: event.id,
            reason: NotJoinable::NotApproved,
        });
    }

    if is_concluded(event.start_date, event.end_date, today) {
        return Err(RegistrationError::EventNotJoinable {
            event_id: event.id,
            reason: NotJoinable::Concluded,
        });
    }

    Ok(())
}

/// Rejects users without a birth date or younger than 18 from adults-only events.
pub fn check_age(
    event: &EventModel,
    birth_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(), RegistrationError> {
    if !event.adults_only {
        return Ok(());
    }

    let Some(birth_date) = birth_date else {
        return Err(RegistrationError::AgeRestricted {
            event_id: event.id,
            reason: AgeRestriction::Unverified,
        });
    };

    if age_on(birth_date, today) < ADULT_AGE {
        return Err(RegistrationError::AgeRestricted {
            event_id: event.id,
            reason: AgeRestriction::Underage,
        });
    }

    Ok(())
}

/// Seats a request ends up claiming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendancePlan {
    /// Clamped quantity, 0 when nothing is left for this user
    pub quantity: i32,
    /// Seats not claimed by other users, `None` when unlimited
    pub remaining: Option<i64>,
}

/// Clamps a requested quantity to 1..=5 and then to the seats other users left free.
///
/// # Arguments
/// - `capacity` - Event capacity, 0 for unlimited
/// - `others_used` - Seats claimed by everyone except the requesting user
/// - `requested` - Quantity asked for, any value
pub fn plan_quantity(capacity: i32, others_used: i64, requested: i32) -> AttendancePlan {
    let quantity = requested.clamp(MIN_QUANTITY, MAX_QUANTITY);
    let remaining = available(capacity, others_used).remaining();

    let quantity = match remaining {
        Some(remaining) if i64::from(quantity) > remaining => remaining as i32,
        _ => quantity,
    };

    AttendancePlan {
        quantity,
        remaining,
    }
}

/// Occupancy check run after the ledger write and before commit.
///
/// Fails when a bounded event holds more than its capacity and the write left the user with
/// seats. A user holding 0 seats never takes part in an overbooking, so releasing a claim on an
/// event whose capacity was lowered below its occupancy still succeeds.
pub fn check_occupancy(
    event: &EventModel,
    occupied: i64,
    quantity: i32,
) -> Result<(), RegistrationError> {
    if event.capacity > 0 && quantity > 0 && occupied > i64::from(event.capacity) {
        return Err(RegistrationError::NoCapacityRemaining { event_id: event.id });
    }

    Ok(())
}

/// Validates the buyer contact details of the checkout form.
pub fn validate_contact(form: &AttendanceRequestDto) -> Result<(), ValidationError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(ValidationError::new("name", "This field is required"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::new(
            "name",
            format!("Ensure this value has at most {} characters", MAX_NAME_LEN),
        ));
    }

    let email = form.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ValidationError::new("email", "Enter a valid email address"));
    }
    if !email.eq_ignore_ascii_case(form.email_confirmation.trim()) {
        return Err(ValidationError::new(
            "email_confirmation",
            "Email addresses don't match",
        ));
    }

    if let Some(phone) = &form.phone {
        if phone.trim().chars().count() > MAX_PHONE_LEN {
            return Err(ValidationError::new(
                "phone",
                format!("Ensure this value has at most {} characters", MAX_PHONE_LEN),
            ));
        }
    }

    Ok(())
}

/// Ledger entry with its cost at the event's unit price.
pub fn registration_dto(registration: RegistrationModel, unit_price: i64) -> RegistrationDto {
    RegistrationDto {
        event_id: registration.event_id,
        user_id: registration.user_id,
        quantity: registration.quantity,
        unit_price,
        total_cost: unit_price * i64::from(registration.quantity),
        created_at: registration.created_at,
    }
}

pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationService<'a> {
    /// Creates a new instance of [`RegistrationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Previews what an attendance request would store, without writing anything.
    ///
    /// # Arguments
    /// - `event_id` - Event to attend
    /// - `user` - Requesting user
    /// - `requested_quantity` - Seats asked for, clamped like a real request
    /// - `today` - Local calendar day
    ///
    /// # Returns
    /// - `Ok(AttendanceQuoteDto)` - Clamped quantity, remaining seats and total cost
    /// - `Err(Error::EventError)` - Event does not exist
    /// - `Err(Error::RegistrationError)` - Event not joinable or user fails the age check
    /// - `Err(Error::DbErr)` - Database error
    pub async fn quote(
        &self,
        event_id: i32,
        user: &UserModel,
        requested_quantity: i32,
        today: NaiveDate,
    ) -> Result<AttendanceQuoteDto, Error> {
        let event = EventRepository::new(self.db)
            .get(event_id)
            .await?
            .ok_or(EventError::NotFound(event_id))?;

        check_joinable(&event, today)?;
        check_age(&event, user.birth_date, today)?;

        let registrations = RegistrationRepository::new(self.db);
        let others_used = registrations.occupied_by_others(event.id, user.id).await?;
        let plan = plan_quantity(event.capacity, others_used, requested_quantity);
        let already_registered = registrations.get(event.id, user.id).await?.is_some();

        Ok(AttendanceQuoteDto {
            event_id: event.id,
            quantity: plan.quantity,
            unit_price: event.price,
            total_cost: event.price * i64::from(plan.quantity),
            remaining: plan.remaining,
            already_registered,
        })
    }

    /// Claims seats on an event for a user, or revises the user's existing claim.
    ///
    /// The quantity is clamped to 1..=5 and then to the seats other users left free. A user
    /// with an existing registration gets its quantity overwritten, with 0 when nothing is left.
    /// A first request that would claim 0 seats fails with no capacity remaining. Runs in a
    /// transaction holding the event row lock. Occupancy is checked again after the write and
    /// the transaction is rolled back if the capacity was exceeded.
    ///
    /// # Arguments
    /// - `event_id` - Event to attend
    /// - `user_id` - Requesting user
    /// - `requested_quantity` - Seats asked for
    /// - `today` - Local calendar day
    ///
    /// # Returns
    /// - `Ok(RegistrationDto)` - Stored registration with its total cost
    /// - `Err(Error::EventError)` - Event does not exist
    /// - `Err(Error::RegistrationError)` - Event not joinable, age restricted or no seats left
    /// - `Err(Error::DbErr)` - Database error
    pub async fn request_attendance(
        &self,
        event_id: i32,
        user_id: i32,
        requested_quantity: i32,
        today: NaiveDate,
    ) -> Result<RegistrationDto, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db;
        ctx.execute_with_retry(
            &format!("attendance request of user ID {} for event ID {}", user_id, event_id),
            |_| {
                let db = db.clone();

                Box::pin(async move {
                    write_attendance(&db, event_id, user_id, requested_quantity, today).await
                })
            },
        )
        .await
    }

    /// The user's registration for an event with its total cost.
    ///
    /// # Returns
    /// - `Ok(Some(RegistrationDto))` - The user is registered
    /// - `Ok(None)` - The user holds no registration for the event
    /// - `Err(Error::EventError)` - Event does not exist
    /// - `Err(Error::DbErr)` - Database error
    pub async fn get_registration(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<Option<RegistrationDto>, Error> {
        let event = EventRepository::new(self.db)
            .get(event_id)
            .await?
            .ok_or(EventError::NotFound(event_id))?;

        let registration = RegistrationRepository::new(self.db)
            .get(event.id, user_id)
            .await?;

        Ok(registration.map(|registration| registration_dto(registration, event.price)))
    }

    /// The user's registrations with their events, newest first.
    pub async fn list_user_registrations(
        &self,
        user_id: i32,
        today: NaiveDate,
    ) -> Result<Vec<UserRegistrationDto>, Error> {
        let entries = RegistrationRepository::new(self.db)
            .find_by_user(user_id)
            .await?;

        entries
            .into_iter()
            .map(|(registration, event)| {
                let event = event.ok_or_else(|| {
                    Error::InternalError(format!(
                        "Event ID {} of a registration of user ID {} is missing",
                        registration.event_id, registration.user_id
                    ))
                })?;

                Ok(UserRegistrationDto {
                    registration: registration_dto(registration, event.price),
                    event: event_dto(event, today),
                })
            })
            .collect()
    }
}

/// One attempt of [`RegistrationService::request_attendance`].
async fn write_attendance(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
    requested_quantity: i32,
    today: NaiveDate,
) -> Result<RegistrationDto, Error> {
    let txn = db.begin().await?;

    let event = EventRepository::new(&txn)
        .get_for_update(event_id)
        .await?
        .ok_or(EventError::NotFound(event_id))?;

    check_joinable(&event, today)?;

    let user = UserRepository::new(&txn)
        .get(user_id)
        .await?
        .ok_or(AuthError::UserNotInDatabase(user_id))?;

    check_age(&event, user.birth_date, today)?;

    let registrations = RegistrationRepository::new(&txn);
    let others_used = registrations.occupied_by_others(event.id, user.id).await?;
    let plan = plan_quantity(event.capacity, others_used, requested_quantity);

    let registration = match registrations.get(event.id, user.id).await? {
        // Revisions store the clamped quantity, 0 releases the claim
        Some(_) => registrations
            .set_quantity(event.id, user.id, plan.quantity)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Registration of user ID {} for event ID {} vanished inside its transaction",
                    user.id, event.id
                ))
            })?,
        None if plan.quantity == 0 => {
            return Err(RegistrationError::NoCapacityRemaining { event_id: event.id }.into());
        }
        None => registrations.create(event.id, user.id, plan.quantity).await?,
    };

    let occupied = registrations.occupied(event.id).await?;
    if let Err(err) = check_occupancy(&event, occupied, registration.quantity) {
        tracing::warn!(
            "Event ID {} would hold {} of {} seats, rolling back",
            event.id,
            occupied,
            event.capacity
        );
        return Err(err.into());
    }

    txn.commit().await?;

    tracing::info!(
        "User ID {} holds {} seat(s) for event ID {}",
        user.id,
        registration.quantity,
        event.id
    );

    Ok(registration_dto(registration, event.price))
}
