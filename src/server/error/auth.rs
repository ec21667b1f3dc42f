use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header on a protected route.
    #[error("Request did not carry a bearer token")]
    MissingCredential,

    /// Bearer token is unknown or expired.
    #[error("Bearer token is unknown or expired")]
    InvalidCredential,

    /// Token resolved to a user id that no longer exists.
    #[error("Token resolved to user {0} which is not in the database")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks a required permission.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Email/password pair did not match a user.
    #[error("Invalid login credentials")]
    InvalidLogin,

    /// Registration attempted with an email that is already in use.
    #[error("Email already registered")]
    EmailTaken,

    /// Registration supplied an admin code that is wrong or expired.
    #[error("Invalid or expired admin code")]
    InvalidAdminCode,
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingCredential` / `InvalidCredential` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `InvalidLogin` / `EmailTaken` / `InvalidAdminCode` → 400 Bad Request
///
/// Details are logged at debug level; client-facing messages stay generic so that
/// unknown emails and wrong passwords are indistinguishable.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingCredential => (StatusCode::UNAUTHORIZED, "Authentication required"),
            Self::InvalidCredential | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Invalid or expired token")
            }
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
            Self::InvalidLogin => (StatusCode::BAD_REQUEST, "Invalid credentials"),
            Self::EmailTaken => (StatusCode::BAD_REQUEST, "Email already registered"),
            Self::InvalidAdminCode => (StatusCode::BAD_REQUEST, "Invalid or expired admin code"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
