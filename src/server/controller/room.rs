use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        room::{CreateRoomDto, RoomDto, UpdateRoomDto},
    },
    server::{
        error::AppError,
        extract::{ApiJson, ApiPath, ApiQuery},
        middleware::auth::{AuthGuard, Permission},
        model::{
            booking::DateRange,
            room::{AvailableRoomsFilter, CreateRoomParams, RoomSearch, UpdateRoomParams},
        },
        service::room::RoomService,
        state::AppState,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "room";

/// Search parameters for the available-rooms endpoint.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AvailableRoomsQuery {
    /// First day of the stay, `YYYY-MM-DD` (required)
    pub start_date: Option<NaiveDate>,
    /// Last day of the stay, `YYYY-MM-DD`, inclusive (required)
    pub end_date: Option<NaiveDate>,
    /// Substring of the owning hotel's location
    pub location: Option<String>,
    /// Inclusive lower bound on room price (default 0)
    pub min_price: Option<f64>,
    /// Inclusive upper bound on room price (default unbounded)
    pub max_price: Option<f64>,
}

impl AvailableRoomsQuery {
    fn into_filter(self) -> Result<AvailableRoomsFilter, AppError> {
        let (Some(start), Some(end)) = (self.start_date, self.end_date) else {
            return Err(AppError::BadRequest(
                "start_date and end_date are required".to_string(),
            ));
        };

        Ok(AvailableRoomsFilter {
            range: DateRange::new(start, end)?,
            search: RoomSearch {
                location: self.location,
                min_price: Some(self.min_price.unwrap_or(0.0)),
                max_price: self.max_price,
            },
        })
    }
}

/// List every room.
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = ROOM_TAG,
    responses(
        (status = 200, description = "All rooms ordered by id", body = Vec<RoomDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rooms(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rooms = RoomService::new(&state.db).get_all().await?;

    let dtos: Vec<RoomDto> = rooms.into_iter().map(|r| r.into_dto()).collect();

    Ok(Json(dtos))
}

/// List rooms free for a date range.
///
/// Public. A room is listed only if none of its active bookings overlaps the
/// inclusive range; the same rule decides booking conflicts.
///
/// # Returns
/// - `200 OK` - Available rooms ordered by id
/// - `400 Bad Request` - Missing dates or `start_date` after `end_date`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/rooms/available",
    tag = ROOM_TAG,
    params(AvailableRoomsQuery),
    responses(
        (status = 200, description = "Available rooms", body = Vec<RoomDto>),
        (status = 400, description = "Missing or inverted date range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_rooms(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<AvailableRoomsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = query.into_filter()?;

    let rooms = RoomService::new(&state.db).find_available(filter).await?;

    let dtos: Vec<RoomDto> = rooms.into_iter().map(|r| r.into_dto()).collect();

    Ok(Json(dtos))
}

/// Get a single room.
#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room", body = RoomDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let room = RoomService::new(&state.db).get_by_id(id).await?;

    Ok(Json(room.into_dto()))
}

/// Create a room.
///
/// # Access Control
/// - `Admin` - Only admins can create rooms
///
/// # Returns
/// - `201 Created` - Room created
/// - `400 Bad Request` - Invalid room data
/// - `404 Not Found` - Referenced hotel does not exist
#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = ROOM_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateRoomDto,
    responses(
        (status = 201, description = "Room created", body = MessageDto),
        (status = 400, description = "Invalid room data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    RoomService::new(&state.db)
        .create(CreateRoomParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(MessageDto::new("Room created"))))
}

/// Update a room.
///
/// # Access Control
/// - `Admin` - Only admins can update rooms
#[utoipa::path(
    put,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    request_body = UpdateRoomDto,
    responses(
        (status = 200, description = "Room updated", body = MessageDto),
        (status = 400, description = "Invalid room data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Room or hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    RoomService::new(&state.db)
        .update(UpdateRoomParams::from_dto(id, payload))
        .await?;

    Ok(Json(MessageDto::new("Room updated")))
}

/// Delete a room that has no bookings.
///
/// # Access Control
/// - `Admin` - Only admins can delete rooms
#[utoipa::path(
    delete,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room deleted", body = MessageDto),
        (status = 400, description = "Room has bookings", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;

    RoomService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new("Room deleted")))
}
