use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        hotel::{CreateHotelDto, HotelDto, UpdateHotelDto},
    },
    server::{
        error::AppError,
        extract::{ApiJson, ApiPath, ApiQuery},
        middleware::auth::{AuthGuard, Permission},
        model::hotel::{CreateHotelParams, HotelFilter, UpdateHotelParams},
        service::hotel::HotelService,
        state::AppState,
    },
};

/// Tag for grouping hotel endpoints in OpenAPI documentation
pub static HOTEL_TAG: &str = "hotel";

/// Optional filters for the hotel listing.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HotelQuery {
    /// Substring of the hotel location
    pub location: Option<String>,
    /// Inclusive lower bound on base price
    pub min_price: Option<f64>,
    /// Inclusive upper bound on base price
    pub max_price: Option<f64>,
}

/// List hotels.
///
/// Public. Hotels without a base price are excluded when either price bound is given.
///
/// # Returns
/// - `200 OK` - Matching hotels ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/hotels",
    tag = HOTEL_TAG,
    params(HotelQuery),
    responses(
        (status = 200, description = "Matching hotels", body = Vec<HotelDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotels(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<HotelQuery>,
) -> Result<impl IntoResponse, AppError> {
    let hotels = HotelService::new(&state.db)
        .get_all(HotelFilter {
            location: query.location,
            min_price: query.min_price,
            max_price: query.max_price,
        })
        .await?;

    let dtos: Vec<HotelDto> = hotels.into_iter().map(|h| h.into_dto()).collect();

    Ok(Json(dtos))
}

/// Get a single hotel.
#[utoipa::path(
    get,
    path = "/api/hotels/{id}",
    tag = HOTEL_TAG,
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel", body = HotelDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotel(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let hotel = HotelService::new(&state.db).get_by_id(id).await?;

    Ok(Json(hotel.into_dto()))
}

/// Create a hotel.
///
/// # Access Control
/// - `Admin` - Only admins can create hotels
///
/// # Returns
/// - `201 Created` - Hotel created
/// - `400 Bad Request` - Invalid hotel data
/// - `401 Unauthorized` / `403 Forbidden` - Not authenticated or not an admin
#[utoipa::path(
    post,
    path = "/api/hotels",
    tag = HOTEL_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateHotelDto,
    responses(
        (status = 201, description = "Hotel created", body = MessageDto),
        (status = 400, description = "Invalid hotel data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_hotel(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateHotelDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    HotelService::new(&state.db)
        .create(CreateHotelParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(MessageDto::new("Hotel created"))))
}

/// Update a hotel.
///
/// # Access Control
/// - `Admin` - Only admins can update hotels
#[utoipa::path(
    put,
    path = "/api/hotels/{id}",
    tag = HOTEL_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Hotel ID")),
    request_body = UpdateHotelDto,
    responses(
        (status = 200, description = "Hotel updated", body = MessageDto),
        (status = 400, description = "Invalid hotel data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_hotel(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateHotelDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    HotelService::new(&state.db)
        .update(UpdateHotelParams::from_dto(id, payload))
        .await?;

    Ok(Json(MessageDto::new("Hotel updated")))
}

/// Delete a hotel along with its rooms.
///
/// Refused while any of its rooms has bookings, so booking history is never lost.
///
/// # Access Control
/// - `Admin` - Only admins can delete hotels
#[utoipa::path(
    delete,
    path = "/api/hotels/{id}",
    tag = HOTEL_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel deleted", body = MessageDto),
        (status = 400, description = "Hotel has booked rooms", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_hotel(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    HotelService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new("Hotel deleted")))
}
