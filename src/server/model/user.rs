//! User domain models and parameters.
//!
//! Provides the registered user, its role, and the typed identity produced by the
//! bearer token guard.

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::{
    model::user::{RoleDto, UserDto},
    server::error::{internal::InternalError, AppError},
};

/// Authorization role attached to every user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Value stored in the `role` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    pub fn into_dto(self) -> RoleDto {
        match self {
            Self::User => RoleDto::User,
            Self::Admin => RoleDto::Admin,
        }
    }
}

impl FromStr for Role {
    type Err = InternalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            other => Err(InternalError::UnknownRole {
                value: other.to_string(),
            }),
        }
    }
}

/// Registered user without credential material.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(UnknownRole))` - Stored role is not recognised
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role: entity.role.parse()?,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.into_dto(),
        }
    }
}

/// User together with the stored Argon2 PHC string, used only by login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Parameters for inserting a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Parameters for a registration request, before hashing.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub admin_code: Option<String>,
}

impl RegisterUserParams {
    pub fn from_dto(dto: crate::model::auth::RegisterDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            password: dto.password,
            admin_code: dto.admin_code,
        }
    }
}

/// Identity resolved from a bearer token.
///
/// Every booking operation receives this already-authenticated value; the ledger
/// never inspects credentials itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i32,
    pub role: Role,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Issued bearer token with its expiry.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: User,
}
