use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::user::{CreateUserDto, UpdateUserDto};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    pub async fn create(&self, user: CreateUserDto) -> Result<entity::barrio_user::Model, DbErr> {
        let user = entity::barrio_user::ActiveModel {
            username: ActiveValue::Set(user.username),
            email: ActiveValue::Set(user.email),
            role: ActiveValue::Set(user.role),
            birth_date: ActiveValue::Set(user.birth_date),
            is_active: ActiveValue::Set(user.is_active),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::barrio_user::Model>, DbErr> {
        entity::prelude::BarrioUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::barrio_user::Model>, DbErr> {
        entity::prelude::BarrioUser::find()
            .filter(entity::barrio_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Lists all users ordered by username
    pub async fn list(&self) -> Result<Vec<entity::barrio_user::Model>, DbErr> {
        entity::prelude::BarrioUser::find()
            .order_by_asc(entity::barrio_user::Column::Username)
            .all(self.db)
            .await
    }

    /// Updates the editable fields of a user
    ///
    /// Returns `None` if the user does not exist.
    pub async fn update(
        &self,
        user_id: i32,
        changes: UpdateUserDto,
    ) -> Result<Option<entity::barrio_user::Model>, DbErr> {
        let user = match entity::prelude::BarrioUser::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.email = ActiveValue::Set(changes.email);
        user_am.role = ActiveValue::Set(changes.role);
        user_am.birth_date = ActiveValue::Set(changes.birth_date);
        user_am.is_active = ActiveValue::Set(changes.is_active);

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }
}
