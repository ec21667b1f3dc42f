use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        booking::{BookingCreatedDto, BookingDetailsDto, CreateBookingDto},
    },
    server::{
        error::AppError,
        extract::{ApiJson, ApiPath},
        middleware::auth::AuthGuard,
        model::booking::CreateBookingParams,
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Book a room for an inclusive date range.
///
/// The caller becomes the booking's owner. Rejected when any active booking on the
/// same room shares at least one day with the requested range.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - Booking created
/// - `400 Bad Request` - `start_date` after `end_date`, or dates not available
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Room does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Room booked", body = BookingCreatedDto),
        (status = 400, description = "Invalid range or room not available", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let params = CreateBookingParams::from_dto(auth_user.user_id, payload)?;

    let booking = BookingService::new(&state.db, &state.room_locks)
        .create(params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingCreatedDto {
            message: "Room booked successfully".to_string(),
            booking: booking.into_dto(),
        }),
    ))
}

/// List the caller's bookings, newest stay first.
///
/// Includes cancelled bookings. Each entry carries the room number, hotel name and
/// hotel location.
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's bookings", body = Vec<BookingDetailsDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let bookings = BookingService::new(&state.db, &state.room_locks)
        .list_for_user(auth_user.user_id)
        .await?;

    let dtos: Vec<BookingDetailsDto> = bookings.into_iter().map(|b| b.into_dto()).collect();

    Ok(Json(dtos))
}

/// Get one of the caller's bookings.
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking", body = BookingDetailsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let booking = BookingService::new(&state.db, &state.room_locks)
        .get_for_user(id, auth_user.user_id)
        .await?;

    Ok(Json(booking.into_dto()))
}

/// Cancel one of the caller's bookings.
///
/// Cancelling an already cancelled booking also succeeds. Bookings owned by other
/// users are reported as not found.
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking cancelled", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth_user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    BookingService::new(&state.db, &state.room_locks)
        .cancel(id, auth_user.user_id)
        .await?;

    Ok(Json(MessageDto::new("Booking cancelled")))
}
