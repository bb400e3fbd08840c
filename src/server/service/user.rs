//! User lookup and account administration.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, validation::ValidationError, Error},
        model::{
            db::UserModel,
            permission::{can, Capability},
        },
        service::retry::RetryContext,
    },
};

const MAX_USERNAME_LEN: usize = 150;

pub fn user_dto(user: UserModel) -> UserDto {
    UserDto {
        id: user.id,
        username: user.username,
        email: user.email,
        role: user.role,
        birth_date: user.birth_date,
        is_active: user.is_active,
    }
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() || !email.contains('@') {
        return Err(ValidationError::new("email", "Enter a valid email address"));
    }

    Ok(())
}

fn require_user_admin(actor: &UserModel) -> Result<(), AuthError> {
    if !can(actor.role, Capability::ManageUsers) {
        return Err(AuthError::forbidden(actor.id, "manage users"));
    }

    Ok(())
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by ID, retrying transient database failures
    ///
    /// # Arguments
    /// - `user_id` - ID of the user to fetch
    ///
    /// # Returns
    /// - `Ok(Some(UserModel))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(Error::DbErr)` - Database error after retries
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserModel>, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db;
        ctx.execute_with_retry(&format!("get user ID {}", user_id), |_| {
            let db = db.clone();

            Box::pin(async move { Ok(UserRepository::new(&db).get(user_id).await?) })
        })
        .await
    }

    /// Lists all users ordered by username
    pub async fn list_users(&self, actor: &UserModel) -> Result<Vec<UserDto>, Error> {
        require_user_admin(actor)?;

        let users = UserRepository::new(self.db).list().await?;

        Ok(users.into_iter().map(user_dto).collect())
    }

    /// Creates a user account
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::AuthError)` - Actor lacks the manage users capability
    /// - `Err(Error::ValidationError)` - Username missing, too long or taken, or invalid email
    /// - `Err(Error::DbErr)` - Database error
    pub async fn create_user(
        &self,
        actor: &UserModel,
        user: CreateUserDto,
    ) -> Result<UserDto, Error> {
        require_user_admin(actor)?;

        let username = user.username.trim().to_string();
        if username.is_empty() {
            return Err(ValidationError::new("username", "This field is required").into());
        }
        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(ValidationError::new(
                "username",
                format!("Ensure this value has at most {} characters", MAX_USERNAME_LEN),
            )
            .into());
        }
        validate_email(&user.email)?;

        let user_repository = UserRepository::new(self.db);
        if user_repository.find_by_username(&username).await?.is_some() {
            return Err(ValidationError::new(
                "username",
                "A user with that username already exists",
            )
            .into());
        }

        let created = user_repository
            .create(CreateUserDto {
                username,
                email: user.email.trim().to_string(),
                ..user
            })
            .await?;

        tracing::info!("User ID {} created user ID {}", actor.id, created.id);

        Ok(user_dto(created))
    }

    /// Updates email, role, birth date and active flag of a user
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(Error::AuthError)` - Actor lacks the manage users capability
    /// - `Err(Error::ValidationError)` - Invalid email
    /// - `Err(Error::DbErr)` - Database error
    pub async fn update_user(
        &self,
        actor: &UserModel,
        user_id: i32,
        changes: UpdateUserDto,
    ) -> Result<Option<UserDto>, Error> {
        require_user_admin(actor)?;
        validate_email(&changes.email)?;

        let updated = UserRepository::new(self.db)
            .update(
                user_id,
                UpdateUserDto {
                    email: changes.email.trim().to_string(),
                    ..changes
                },
            )
            .await?;

        if let Some(user) = &updated {
            tracing::info!("User ID {} updated user ID {}", actor.id, user.id);
        }

        Ok(updated.map(user_dto))
    }
}
