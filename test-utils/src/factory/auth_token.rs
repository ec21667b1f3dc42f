//! Auth token factory for creating bearer tokens in tests.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating bearer tokens owned by a user.
pub struct AuthTokenFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    token: String,
    expires_at: DateTime<Utc>,
}

impl<'a> AuthTokenFactory<'a> {
    /// Creates a new AuthTokenFactory with default values.
    ///
    /// Defaults:
    /// - token: `"test-token-{id}"`
    /// - expires_at: 1 hour from now
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            token: format!("test-token-{}", next_id()),
            expires_at: Utc::now() + Duration::hours(1),
        }
    }

    /// Sets the raw token value.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Sets the expiry timestamp.
    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Builds and inserts the token entity into the database.
    pub async fn build(self) -> Result<entity::auth_token::Model, DbErr> {
        entity::auth_token::ActiveModel {
            token: ActiveValue::Set(self.token),
            user_id: ActiveValue::Set(self.user_id),
            expires_at: ActiveValue::Set(self.expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a valid bearer token for the user.
pub async fn create_auth_token(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::auth_token::Model, DbErr> {
    AuthTokenFactory::new(db, user_id).build().await
}
