use entity::sea_orm_active_enums::Role;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel};

use crate::{error::TestError, fixtures::factory, model::UserModel, TestSetup};

impl TestSetup {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> UserFixtures<'a> {
    /// Inserts the provided model, ignoring its `id`.
    pub async fn insert(&self, model: UserModel) -> Result<UserModel, TestError> {
        let mut active = model.into_active_model().reset_all();
        active.id = ActiveValue::NotSet;

        Ok(entity::prelude::BarrioUser::insert(active)
            .exec_with_returning(&self.setup.state.db)
            .await?)
    }

    /// Inserts an active user with the given role and no birth date.
    pub async fn insert_user(&self, username: &str, role: Role) -> Result<UserModel, TestError> {
        self.insert(UserModel {
            role,
            ..factory::user(username)
        })
        .await
    }

    /// Inserts an active resident with a birth date.
    pub async fn insert_user_born(
        &self,
        username: &str,
        birth_date: chrono::NaiveDate,
    ) -> Result<UserModel, TestError> {
        self.insert(UserModel {
            birth_date: Some(birth_date),
            ..factory::user(username)
        })
        .await
    }
}
