use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{LoginDto, LoginResponseDto, RegisterDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        extract::ApiJson,
        middleware::auth::{bearer_token, AuthGuard},
        model::user::RegisterUserParams,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates a user with the `user` role, or the `admin` role when a valid bootstrap
/// admin code is supplied.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Missing fields, email already registered or invalid admin code
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User registered", body = MessageDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.admin_code_service, state.token_ttl);

    service
        .register(RegisterUserParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("User registered successfully")),
    ))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Bearer token, its expiry and the user
/// - `400 Bad Request` - Invalid credentials
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Token issued", body = LoginResponseDto),
        (status = 400, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.admin_code_service, state.token_ttl);

    let issued = service.login(&payload.email, &payload.password).await?;

    Ok(Json(LoginResponseDto {
        token: issued.token,
        expires_at: issued.expires_at,
        user: issued.user.into_dto(),
    }))
}

/// Revoke the presented bearer token.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Token revoked", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;
    let token = bearer_token(&headers)?;

    AuthService::new(&state.db, &state.admin_code_service, state.token_ttl)
        .logout(token)
        .await?;

    Ok(Json(MessageDto::new("Logged out")))
}

/// Get the authenticated user.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let user = AuthService::new(&state.db, &state.admin_code_service, state.token_ttl)
        .current_user(auth_user.user_id)
        .await?;

    Ok(Json(user.into_dto()))
}
