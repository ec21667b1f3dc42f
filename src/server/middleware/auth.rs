use axum::http::{header::AUTHORIZATION, HeaderMap};
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{auth_token::AuthTokenRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::AuthUser,
};

const BEARER_PREFIX: &str = "Bearer ";

pub enum Permission {
    Admin,
}

/// Capability check composed at the top of each protected handler.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Resolves the bearer token and checks every permission in `permissions`.
    ///
    /// An empty slice only requires a valid token.
    pub async fn require(&self, permissions: &[Permission]) -> Result<AuthUser, AppError> {
        let token = bearer_token(self.headers)?;

        let Some(user_id) = AuthTokenRepository::new(self.db)
            .find_user_id(token, Utc::now())
            .await?
        else {
            return Err(AuthError::InvalidCredential.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let auth_user = AuthUser {
            user_id: user.id,
            role: user.role,
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !auth_user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "Catalog changes require the admin role".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(auth_user)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingCredential)?;

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingCredential)?;

    Ok(token)
}
