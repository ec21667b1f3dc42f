//! Bearer token repository.
//!
//! Tokens are opaque random strings stored alongside the owning user id and an
//! absolute expiry. Expired rows are ignored on lookup and pruned on login.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};

pub struct AuthTokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuthTokenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a freshly issued token for `user_id`.
    pub async fn create(
        &self,
        user_id: i32,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::auth_token::ActiveModel {
            token: ActiveValue::Set(token.to_string()),
            user_id: ActiveValue::Set(user_id),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Resolves a token to its user id, ignoring tokens that expired before `now`.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - Token exists and is still valid
    /// - `Ok(None)` - Token unknown or expired
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_user_id(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<i32>, DbErr> {
        let entity = entity::prelude::AuthToken::find()
            .filter(entity::auth_token::Column::Token.eq(token))
            .filter(entity::auth_token::Column::ExpiresAt.gt(now))
            .one(self.db)
            .await?;

        Ok(entity.map(|t| t.user_id))
    }

    /// Revokes a token. Returns whether a row was removed.
    pub async fn delete(&self, token: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::AuthToken::delete_many()
            .filter(entity::auth_token::Column::Token.eq(token))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes every token that expired at or before `now`.
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::AuthToken::delete_many()
            .filter(entity::auth_token::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
