use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct RegisterDto {
    pub name: String,
    pub email: String,
    pub password: String,
    /// One-time bootstrap code printed at startup; grants the admin role.
    #[serde(default)]
    pub admin_code: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct LoginResponseDto {
    /// Opaque bearer token for the `Authorization` header.
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserDto,
}
