use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel};

use crate::{error::TestError, fixtures::factory, model::RegistrationModel, TestSetup};

impl TestSetup {
    pub fn registration(&self) -> RegistrationFixtures<'_> {
        RegistrationFixtures { setup: self }
    }
}

pub struct RegistrationFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> RegistrationFixtures<'a> {
    /// Inserts a ledger entry claiming `quantity` seats.
    pub async fn insert_registration(
        &self,
        event_id: i32,
        user_id: i32,
        quantity: i32,
    ) -> Result<RegistrationModel, TestError> {
        let active = factory::registration(event_id, user_id, quantity)
            .into_active_model()
            .reset_all();

        Ok(entity::prelude::BarrioRegistration::insert(active)
            .exec_with_returning(&self.setup.state.db)
            .await?)
    }
}
