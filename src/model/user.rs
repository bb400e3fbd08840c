use chrono::NaiveDate;
use entity::sea_orm_active_enums::Role;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[schema(value_type = String, example = "resident")]
    pub role: Role,
    pub birth_date: Option<NaiveDate>,
    pub is_active: bool,
}

/// Payload used by administrators to create a user account
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUserDto {
    pub username: String,
    pub email: String,
    #[schema(value_type = String, example = "resident")]
    pub role: Role,
    pub birth_date: Option<NaiveDate>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Payload used by administrators to edit an existing user account
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateUserDto {
    pub email: String,
    #[schema(value_type = String, example = "moderator")]
    pub role: Role,
    pub birth_date: Option<NaiveDate>,
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}
