use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

/// Registration ledger, the single source of truth for event occupancy
pub struct RegistrationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RegistrationRepository<'a, C> {
    /// Creates a new instance of [`RegistrationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the ledger entry of a user for an event
    ///
    /// Fails with a unique constraint violation if the user already holds an entry.
    pub async fn create(
        &self,
        event_id: i32,
        user_id: i32,
        quantity: i32,
    ) -> Result<entity::barrio_registration::Model, DbErr> {
        let registration = entity::barrio_registration::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            quantity: ActiveValue::Set(quantity),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        registration.insert(self.db).await
    }

    pub async fn get(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::barrio_registration::Model>, DbErr> {
        entity::prelude::BarrioRegistration::find_by_id((event_id, user_id))
            .one(self.db)
            .await
    }

    /// Overwrites the quantity of an existing entry
    ///
    /// Returns `None` if the user holds no entry for the event.
    pub async fn set_quantity(
        &self,
        event_id: i32,
        user_id: i32,
        quantity: i32,
    ) -> Result<Option<entity::barrio_registration::Model>, DbErr> {
        let registration = match self.get(event_id, user_id).await? {
            Some(registration) => registration,
            None => return Ok(None),
        };

        let mut registration_am = registration.into_active_model();
        registration_am.quantity = ActiveValue::Set(quantity);

        Ok(Some(registration_am.update(self.db).await?))
    }

    /// Sum of seats claimed for an event, 0 when there are no entries
    pub async fn occupied(&self, event_id: i32) -> Result<i64, DbErr> {
        self.sum_quantities(event_id, None).await
    }

    /// Sum of seats claimed for an event by everyone except `user_id`
    pub async fn occupied_by_others(&self, event_id: i32, user_id: i32) -> Result<i64, DbErr> {
        self.sum_quantities(event_id, Some(user_id)).await
    }

    async fn sum_quantities(
        &self,
        event_id: i32,
        excluded_user: Option<i32>,
    ) -> Result<i64, DbErr> {
        let mut query = entity::prelude::BarrioRegistration::find()
            .select_only()
            .column_as(entity::barrio_registration::Column::Quantity.sum(), "total")
            .filter(entity::barrio_registration::Column::EventId.eq(event_id));

        if let Some(user_id) = excluded_user {
            query = query.filter(entity::barrio_registration::Column::UserId.ne(user_id));
        }

        // SUM over no rows is NULL
        let total = query.into_tuple::<Option<i64>>().one(self.db).await?;

        Ok(total.flatten().unwrap_or(0))
    }

    /// Entries of a user holding seats, with their events, newest first
    pub async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<
        Vec<(
            entity::barrio_registration::Model,
            Option<entity::barrio_event::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::BarrioRegistration::find()
            .filter(entity::barrio_registration::Column::UserId.eq(user_id))
            .filter(entity::barrio_registration::Column::Quantity.gt(0))
            .find_also_related(entity::prelude::BarrioEvent)
            .order_by_desc(entity::barrio_registration::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// IDs of the events a user holds seats for
    pub async fn event_ids_for_user(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::BarrioRegistration::find()
            .select_only()
            .column(entity::barrio_registration::Column::EventId)
            .filter(entity::barrio_registration::Column::UserId.eq(user_id))
            .filter(entity::barrio_registration::Column::Quantity.gt(0))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
