//! Account registration, login and logout.
//!
//! Passwords are stored as Argon2 hashes. Login issues an opaque random bearer token
//! persisted with an absolute expiry; `AuthGuard` resolves it on later requests.

use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::{auth_token::AuthTokenRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, IssuedToken, RegisterUserParams, Role, User},
    service::admin::code::AdminCodeService,
    util::{
        password::{hash_password, verify_password},
        token::generate_random_string,
    },
};

/// Length of issued bearer tokens.
pub const TOKEN_LENGTH: usize = 48;

/// Service providing account operations.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    admin_code_service: &'a AdminCodeService,
    token_ttl: Duration,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `admin_code_service` - Bootstrap code store consulted by `register`
    /// - `token_ttl` - Lifetime of tokens issued by `login`
    pub fn new(
        db: &'a DatabaseConnection,
        admin_code_service: &'a AdminCodeService,
        token_ttl: Duration,
    ) -> Self {
        Self {
            db,
            admin_code_service,
            token_ttl,
        }
    }

    /// Registers a new account.
    ///
    /// The role is always `User` unless a valid bootstrap admin code is supplied. The
    /// email check runs before the code is consumed so a taken email does not burn it.
    ///
    /// # Returns
    /// - `Ok(User)` - Created account
    /// - `Err(AppError::BadRequest)` - Missing name, email or password
    /// - `Err(AppError::AuthErr(EmailTaken))` - Email already registered
    /// - `Err(AppError::AuthErr(InvalidAdminCode))` - Admin code wrong or expired
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        validate_registration(&params)?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.email_exists(&params.email).await? {
            return Err(AuthError::EmailTaken.into());
        }

        let role = match params.admin_code.as_deref() {
            Some(code) => {
                if !self.admin_code_service.validate_and_consume(code).await {
                    return Err(AuthError::InvalidAdminCode.into());
                }
                Role::Admin
            }
            None => Role::User,
        };

        let password_hash = hash_password(&params.password)?;

        let result = user_repo
            .create(CreateUserParams {
                name: params.name,
                email: params.email,
                password_hash,
                role,
            })
            .await;

        let user = match result {
            Err(AppError::DbErr(err))
                if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
            {
                return Err(AuthError::EmailTaken.into());
            }
            other => other?,
        };

        tracing::info!(user_id = user.id, role = user.role.as_str(), "User registered");

        Ok(user)
    }

    /// Verifies credentials and issues a bearer token.
    ///
    /// Unknown emails and wrong passwords produce the same error. Expired tokens are
    /// pruned before the new one is stored.
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - Token, expiry and the authenticated user
    /// - `Err(AppError::AuthErr(InvalidLogin))` - Credentials did not match
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, AppError> {
        let email = email.trim().to_lowercase();

        let Some(credentials) = UserRepository::new(self.db)
            .find_credentials_by_email(&email)
            .await?
        else {
            return Err(AuthError::InvalidLogin.into());
        };

        if !verify_password(password, &credentials.password_hash) {
            return Err(AuthError::InvalidLogin.into());
        }

        let now = Utc::now();
        let token_repo = AuthTokenRepository::new(self.db);

        let pruned = token_repo.delete_expired(now).await?;
        if pruned > 0 {
            tracing::debug!(pruned, "Pruned expired tokens");
        }

        let token = generate_random_string(TOKEN_LENGTH);
        let expires_at = now + self.token_ttl;
        token_repo
            .create(credentials.user.id, &token, expires_at)
            .await?;

        tracing::info!(user_id = credentials.user.id, "User logged in");

        Ok(IssuedToken {
            token,
            expires_at,
            user: credentials.user,
        })
    }

    /// Revokes the presented token. Unknown tokens are ignored.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        AuthTokenRepository::new(self.db).delete(token).await?;

        Ok(())
    }

    /// Loads the account behind an authenticated request.
    pub async fn current_user(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
    }
}

fn validate_registration(params: &RegisterUserParams) -> Result<(), AppError> {
    if params.name.is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }
    if !params.email.contains('@') {
        return Err(AppError::BadRequest("A valid email is required".to_string()));
    }
    if params.password.is_empty() {
        return Err(AppError::BadRequest("Password is required".to_string()));
    }

    Ok(())
}
