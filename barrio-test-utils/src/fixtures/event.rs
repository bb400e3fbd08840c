use entity::sea_orm_active_enums::EventStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel};

use crate::{error::TestError, fixtures::factory, model::EventModel, TestSetup};

impl TestSetup {
    pub fn event(&self) -> EventFixtures<'_> {
        EventFixtures { setup: self }
    }
}

pub struct EventFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> EventFixtures<'a> {
    /// Inserts the provided model, ignoring its `id`.
    pub async fn insert(&self, model: EventModel) -> Result<EventModel, TestError> {
        let mut active = model.into_active_model().reset_all();
        active.id = ActiveValue::NotSet;

        Ok(entity::prelude::BarrioEvent::insert(active)
            .exec_with_returning(&self.setup.state.db)
            .await?)
    }

    /// Inserts an approved, undated, free event with the given capacity.
    pub async fn insert_approved_event(
        &self,
        created_by: i32,
        capacity: i32,
    ) -> Result<EventModel, TestError> {
        self.insert(EventModel {
            capacity,
            ..factory::event(created_by)
        })
        .await
    }

    pub async fn insert_event_with_status(
        &self,
        created_by: i32,
        status: EventStatus,
    ) -> Result<EventModel, TestError> {
        self.insert(EventModel {
            status,
            ..factory::event(created_by)
        })
        .await
    }
}
