use chrono::Utc;
use entity::sea_orm_active_enums::EventStatus;
use sea_orm::{
    sea_query::{Expr, Func, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, ExprTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::event::EventFormDto;

/// Filters of the approved event listing
#[derive(Debug, Default, Clone)]
pub struct ApprovedEventFilter {
    /// Restricts the result to these event IDs
    pub only_ids: Option<Vec<i32>>,
    /// Lowercase text contained in the title, description, locality or venue
    pub text: Option<String>,
    /// Lowercase locality matched exactly
    pub locality: Option<String>,
}

/// `LIKE` pattern matching `needle` anywhere, with wildcards in `needle` taken literally
fn contains_pattern(needle: &str) -> LikeExpr {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    LikeExpr::new(format!("%{}%", escaped)).escape('\\')
}

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    /// Creates a new instance of [`EventRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new event in the `pending` state
    pub async fn create(
        &self,
        created_by: i32,
        form: EventFormDto,
    ) -> Result<entity::barrio_event::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let event = entity::barrio_event::ActiveModel {
            title: ActiveValue::Set(form.title),
            description: ActiveValue::Set(form.description),
            status: ActiveValue::Set(EventStatus::Pending),
            created_by: ActiveValue::Set(created_by),
            address: ActiveValue::Set(form.address),
            locality: ActiveValue::Set(form.locality),
            venue: ActiveValue::Set(form.venue),
            start_date: ActiveValue::Set(form.start_date),
            end_date: ActiveValue::Set(form.end_date),
            start_time: ActiveValue::Set(form.start_time),
            end_time: ActiveValue::Set(form.end_time),
            capacity: ActiveValue::Set(form.capacity),
            price: ActiveValue::Set(form.price),
            adults_only: ActiveValue::Set(form.adults_only),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            status_changed_at: ActiveValue::Set(None),
            ..Default::default()
        };

        event.insert(self.db).await
    }

    pub async fn get(&self, event_id: i32) -> Result<Option<entity::barrio_event::Model>, DbErr> {
        entity::prelude::BarrioEvent::find_by_id(event_id)
            .one(self.db)
            .await
    }

    /// Gets an event with its row locked until the surrounding transaction ends
    ///
    /// Emits `SELECT ... FOR UPDATE` on Postgres, SQLite ignores the lock clause since its
    /// writers are already serialized.
    pub async fn get_for_update(
        &self,
        event_id: i32,
    ) -> Result<Option<entity::barrio_event::Model>, DbErr> {
        entity::prelude::BarrioEvent::find_by_id(event_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Replaces the editable fields of an event, lifecycle status is left untouched
    ///
    /// Returns `None` if the event does not exist.
    pub async fn update(
        &self,
        event_id: i32,
        form: EventFormDto,
    ) -> Result<Option<entity::barrio_event::Model>, DbErr> {
        let event = match self.get(event_id).await? {
            Some(event) => event,
            None => return Ok(None),
        };

        let mut event_am = event.into_active_model();
        event_am.title = ActiveValue::Set(form.title);
        event_am.description = ActiveValue::Set(form.description);
        event_am.address = ActiveValue::Set(form.address);
        event_am.locality = ActiveValue::Set(form.locality);
        event_am.venue = ActiveValue::Set(form.venue);
        event_am.start_date = ActiveValue::Set(form.start_date);
        event_am.end_date = ActiveValue::Set(form.end_date);
        event_am.start_time = ActiveValue::Set(form.start_time);
        event_am.end_time = ActiveValue::Set(form.end_time);
        event_am.capacity = ActiveValue::Set(form.capacity);
        event_am.price = ActiveValue::Set(form.price);
        event_am.adults_only = ActiveValue::Set(form.adults_only);
        event_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(event_am.update(self.db).await?))
    }

    /// Sets the lifecycle status of an event
    ///
    /// Returns `None` if the event does not exist.
    pub async fn set_status(
        &self,
        event_id: i32,
        status: EventStatus,
    ) -> Result<Option<entity::barrio_event::Model>, DbErr> {
        let event = match self.get(event_id).await? {
            Some(event) => event,
            None => return Ok(None),
        };

        let now = Utc::now().naive_utc();
        let mut event_am = event.into_active_model();
        event_am.status = ActiveValue::Set(status);
        event_am.status_changed_at = ActiveValue::Set(Some(now));
        event_am.updated_at = ActiveValue::Set(now);

        Ok(Some(event_am.update(self.db).await?))
    }

    /// Deletes an event, its registrations are removed by cascade
    ///
    /// Returns OK regardless of event existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, event_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::BarrioEvent::delete_by_id(event_id)
            .exec(self.db)
            .await
    }

    /// Approved events matching `filter`, ordered by start date, start time and title
    ///
    /// Text comparisons lowercase the stored value with SQL `LOWER`, which SQLite applies to
    /// ASCII letters only.
    pub async fn find_approved(
        &self,
        filter: ApprovedEventFilter,
    ) -> Result<Vec<entity::barrio_event::Model>, DbErr> {
        use entity::barrio_event::Column;

        let lower = |column: Column| Expr::expr(Func::lower(Expr::col(column)));

        let mut query = entity::prelude::BarrioEvent::find()
            .filter(Column::Status.eq(EventStatus::Approved));

        if let Some(ids) = filter.only_ids {
            query = query.filter(Column::Id.is_in(ids));
        }

        if let Some(text) = filter.text {
            query = query.filter(
                Condition::any()
                    .add(lower(Column::Title).like(contains_pattern(&text)))
                    .add(lower(Column::Description).like(contains_pattern(&text)))
                    .add(lower(Column::Locality).like(contains_pattern(&text)))
                    .add(lower(Column::Venue).like(contains_pattern(&text))),
            );
        }

        if let Some(locality) = filter.locality {
            query = query.filter(lower(Column::Locality).eq(locality));
        }

        query
            .order_by_asc(Column::StartDate)
            .order_by_asc(Column::StartTime)
            .order_by_asc(Column::Title)
            .all(self.db)
            .await
    }

    /// Events newest first, optionally restricted to one status and a maximum count
    pub async fn find_newest(
        &self,
        status: Option<EventStatus>,
        limit: Option<u64>,
    ) -> Result<Vec<entity::barrio_event::Model>, DbErr> {
        let mut query = entity::prelude::BarrioEvent::find();

        if let Some(status) = status {
            query = query.filter(entity::barrio_event::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::barrio_event::Column::CreatedAt)
            .order_by_desc(entity::barrio_event::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Counts events, optionally only those with the given status
    pub async fn count(&self, status: Option<EventStatus>) -> Result<u64, DbErr> {
        let mut query = entity::prelude::BarrioEvent::find();

        if let Some(status) = status {
            query = query.filter(entity::barrio_event::Column::Status.eq(status));
        }

        query.count(self.db).await
    }

    /// Distinct non-empty localities across all events, alphabetically
    pub async fn localities(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::BarrioEvent::find()
            .select_only()
            .column(entity::barrio_event::Column::Locality)
            .distinct()
            .filter(entity::barrio_event::Column::Locality.is_not_null())
            .filter(entity::barrio_event::Column::Locality.ne(""))
            .order_by_asc(entity::barrio_event::Column::Locality)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}
