//! Event submission, listing, detail and the moderation lifecycle.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::EventStatus;
use sea_orm::{ActiveEnum, DatabaseConnection, Iterable};

use crate::{
    model::event::{
        AvailabilityDto, EventDetailDto, EventDto, EventFormDto, EventListQuery,
        ModerationSummaryDto,
    },
    server::{
        data::{
            event::{ApprovedEventFilter, EventRepository},
            registration::RegistrationRepository,
        },
        error::{auth::AuthError, event::EventError, validation::ValidationError, Error},
        model::{
            db::{EventModel, UserModel},
            permission::{can, can_manage_event, Capability},
        },
        service::{
            capacity::CapacityService,
            registration::{check_age, registration_dto},
        },
        util::time::{event_timing, time_state},
    },
};

const MAX_TITLE_LEN: usize = 200;
const RECENT_EVENTS_LIMIT: u64 = 10;

/// Converts an event row into its API representation as seen on `today`.
pub fn event_dto(event: EventModel, today: NaiveDate) -> EventDto {
    EventDto {
        timing: event_timing(event.start_date, today),
        time_state: time_state(event.start_date, event.end_date, today),
        is_free: event.price == 0,
        id: event.id,
        title: event.title,
        description: event.description,
        status: event.status,
        created_by: event.created_by,
        address: event.address,
        locality: event.locality,
        venue: event.venue,
        start_date: event.start_date,
        end_date: event.end_date,
        start_time: event.start_time,
        end_time: event.end_time,
        capacity: event.capacity,
        price: event.price,
        adults_only: event.adults_only,
        created_at: event.created_at,
    }
}

/// Validates an event form and trims its text fields.
///
/// Blank optional text becomes `None`.
pub fn validate_event_form(form: EventFormDto) -> Result<EventFormDto, ValidationError> {
    let title = form.title.trim().to_string();
    if title.is_empty() {
        return Err(ValidationError::new("title", "This field is required"));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::new(
            "title",
            format!("Ensure this value has at most {} characters", MAX_TITLE_LEN),
        ));
    }

    if let (Some(start_date), Some(end_date)) = (form.start_date, form.end_date) {
        if end_date < start_date {
            return Err(ValidationError::new(
                "end_date",
                "The end date can't be before the start date",
            ));
        }
    }

    if form.capacity < 0 {
        return Err(ValidationError::new(
            "capacity",
            "Ensure this value is greater than or equal to 0",
        ));
    }
    if form.price < 0 {
        return Err(ValidationError::new(
            "price",
            "Ensure this value is greater than or equal to 0",
        ));
    }

    Ok(EventFormDto {
        title,
        description: form.description.trim().to_string(),
        address: form.address.trim().to_string(),
        locality: non_blank(form.locality),
        venue: non_blank(form.venue),
        ..form
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses a lifecycle status from its stored name (`pending`, `approved`, `rejected`).
pub fn parse_status(raw: &str) -> Result<EventStatus, EventError> {
    EventStatus::iter()
        .find(|status| status.to_value() == raw)
        .ok_or_else(|| EventError::InvalidLifecycleTransition(raw.to_string()))
}

/// Approved events are public, the rest only visible to moderators.
fn is_visible_to(event: &EventModel, viewer: Option<&UserModel>) -> bool {
    event.status == EventStatus::Approved
        || viewer.is_some_and(|user| can(user.role, Capability::ModerateEvent))
}

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    /// Creates a new instance of [`EventService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches an event or fails with [`EventError::NotFound`].
    async fn get_event(&self, event_id: i32) -> Result<EventModel, Error> {
        Ok(EventRepository::new(self.db)
            .get(event_id)
            .await?
            .ok_or(EventError::NotFound(event_id))?)
    }

    /// Fetches an event the viewer is allowed to see, hidden events look missing.
    async fn get_visible_event(
        &self,
        event_id: i32,
        viewer: Option<&UserModel>,
    ) -> Result<EventModel, Error> {
        let event = self.get_event(event_id).await?;

        if !is_visible_to(&event, viewer) {
            return Err(EventError::NotFound(event_id).into());
        }

        Ok(event)
    }

    /// Submits a new event for review.
    ///
    /// # Returns
    /// - `Ok(EventDto)` - The stored event, always `pending`
    /// - `Err(Error::AuthError)` - User lacks the create capability
    /// - `Err(Error::ValidationError)` - Invalid form
    /// - `Err(Error::DbErr)` - Database error
    pub async fn create(
        &self,
        user: &UserModel,
        form: EventFormDto,
        today: NaiveDate,
    ) -> Result<EventDto, Error> {
        if !can(user.role, Capability::CreateEvent) {
            return Err(AuthError::forbidden(user.id, "create events").into());
        }

        let form = validate_event_form(form)?;
        let event = EventRepository::new(self.db).create(user.id, form).await?;

        tracing::info!("User ID {} submitted event ID {} for review", user.id, event.id);

        Ok(event_dto(event, today))
    }

    /// Edits an event owned by the user, or any event for moderators.
    ///
    /// # Returns
    /// - `Ok(EventDto)` - The updated event
    /// - `Err(Error::EventError)` - Event does not exist
    /// - `Err(Error::AuthError)` - User neither owns nor moderates the event
    /// - `Err(Error::ValidationError)` - Invalid form
    /// - `Err(Error::DbErr)` - Database error
    pub async fn update(
        &self,
        user: &UserModel,
        event_id: i32,
        form: EventFormDto,
        today: NaiveDate,
    ) -> Result<EventDto, Error> {
        let event = self.get_event(event_id).await?;

        if !can_manage_event(user, &event) {
            return Err(AuthError::forbidden(user.id, format!("edit event ID {}", event_id)).into());
        }

        let form = validate_event_form(form)?;
        let event = EventRepository::new(self.db)
            .update(event_id, form)
            .await?
            .ok_or(EventError::NotFound(event_id))?;

        Ok(event_dto(event, today))
    }

    /// Deletes an event owned by the user, or any event for moderators.
    pub async fn delete(&self, user: &UserModel, event_id: i32) -> Result<(), Error> {
        let event = self.get_event(event_id).await?;

        if !can_manage_event(user, &event) {
            return Err(
                AuthError::forbidden(user.id, format!("delete event ID {}", event_id)).into(),
            );
        }

        EventRepository::new(self.db).delete(event_id).await?;

        tracing::info!("User ID {} deleted event ID {}", user.id, event_id);

        Ok(())
    }

    /// Approved events matching the listing filters.
    ///
    /// `mine` is ignored for anonymous viewers.
    pub async fn list(
        &self,
        viewer: Option<&UserModel>,
        query: EventListQuery,
        today: NaiveDate,
    ) -> Result<Vec<EventDto>, Error> {
        let only_ids = match (query.mine, viewer) {
            (Some(true), Some(user)) => Some(
                RegistrationRepository::new(self.db)
                    .event_ids_for_user(user.id)
                    .await?,
            ),
            _ => None,
        };

        let text = query
            .q
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());
        let locality = query
            .locality
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty());

        let events = EventRepository::new(self.db)
            .find_approved(ApprovedEventFilter {
                only_ids,
                text,
                locality,
            })
            .await?;

        Ok(events
            .into_iter()
            .map(|event| event_dto(event, today))
            .collect())
    }

    /// Distinct non-empty localities, for the listing filter.
    pub async fn localities(&self) -> Result<Vec<String>, Error> {
        Ok(EventRepository::new(self.db).localities().await?)
    }

    /// Event detail as seen by the viewer.
    ///
    /// # Returns
    /// - `Ok(EventDetailDto)` - Event with availability, the viewer's registration and age eligibility
    /// - `Err(Error::EventError)` - Event does not exist or is hidden from the viewer
    /// - `Err(Error::DbErr)` - Database error
    pub async fn detail(
        &self,
        viewer: Option<&UserModel>,
        event_id: i32,
        today: NaiveDate,
    ) -> Result<EventDetailDto, Error> {
        let event = self.get_visible_event(event_id, viewer).await?;

        let availability = CapacityService::new(self.db).availability(&event).await?;

        let registration = match viewer {
            Some(user) => RegistrationRepository::new(self.db)
                .get(event.id, user.id)
                .await?
                .map(|registration| registration_dto(registration, event.price)),
            None => None,
        };

        let eligible_by_age = match viewer {
            Some(user) => check_age(&event, user.birth_date, today).is_ok(),
            None => !event.adults_only,
        };

        Ok(EventDetailDto {
            event: event_dto(event, today),
            availability,
            registration,
            eligible_by_age,
        })
    }

    /// Occupied and available seats of a visible event.
    pub async fn availability(
        &self,
        viewer: Option<&UserModel>,
        event_id: i32,
    ) -> Result<AvailabilityDto, Error> {
        let event = self.get_visible_event(event_id, viewer).await?;

        Ok(CapacityService::new(self.db).availability(&event).await?)
    }

    /// Moves an event to any lifecycle status.
    ///
    /// # Arguments
    /// - `actor` - Moderator or administrator performing the override
    /// - `event_id` - Event to update
    /// - `raw_status` - Target status name, one of `pending`, `approved`, `rejected`
    /// - `today` - Local calendar day
    ///
    /// # Returns
    /// - `Ok(EventDto)` - The updated event
    /// - `Err(Error::AuthError)` - Actor lacks the moderate capability
    /// - `Err(Error::EventError)` - Unknown status or event, nothing is changed
    /// - `Err(Error::DbErr)` - Database error
    pub async fn set_status(
        &self,
        actor: &UserModel,
        event_id: i32,
        raw_status: &str,
        today: NaiveDate,
    ) -> Result<EventDto, Error> {
        if !can(actor.role, Capability::ModerateEvent) {
            return Err(AuthError::forbidden(actor.id, "moderate events").into());
        }

        let status = parse_status(raw_status)?;
        let event = EventRepository::new(self.db)
            .set_status(event_id, status)
            .await?
            .ok_or(EventError::NotFound(event_id))?;

        tracing::info!(
            "User ID {} set event ID {} status to {}",
            actor.id,
            event.id,
            raw_status
        );

        Ok(event_dto(event, today))
    }

    /// Dashboard counts, the pending queue and the most recently created events.
    pub async fn moderation_summary(
        &self,
        actor: &UserModel,
        today: NaiveDate,
    ) -> Result<ModerationSummaryDto, Error> {
        if !can(actor.role, Capability::ModerateEvent) {
            return Err(AuthError::forbidden(actor.id, "view the moderation panel").into());
        }

        let events = EventRepository::new(self.db);

        let total_events = events.count(None).await?;
        let approved_events = events.count(Some(EventStatus::Approved)).await?;
        let rejected_events = events.count(Some(EventStatus::Rejected)).await?;
        let pending_events = events.find_newest(Some(EventStatus::Pending), None).await?;
        let recent_events = events.find_newest(None, Some(RECENT_EVENTS_LIMIT)).await?;

        Ok(ModerationSummaryDto {
            total_events,
            approved_events,
            rejected_events,
            pending_events: pending_events
                .into_iter()
                .map(|event| event_dto(event, today))
                .collect(),
            recent_events: recent_events
                .into_iter()
                .map(|event| event_dto(event, today))
                .collect(),
        })
    }
}
