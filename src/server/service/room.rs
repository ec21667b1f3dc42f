//! Room catalog service.
//!
//! Rooms always reference an existing hotel. The available-rooms search delegates to
//! `AvailabilityService` so it shares the booking ledger's overlap rule.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::{booking::BookingRepository, hotel::HotelRepository, room::RoomRepository},
    error::AppError,
    model::room::{AvailableRoomsFilter, CreateRoomParams, Room, UpdateRoomParams},
    service::availability::AvailabilityService,
};

const ROOM_NOT_FOUND: &str = "Room not found";
const HOTEL_NOT_FOUND: &str = "Hotel not found";
const ROOM_HAS_BOOKINGS: &str = "Room has bookings and cannot be deleted";

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a room under an existing hotel.
    ///
    /// # Returns
    /// - `Ok(Room)` - Created room
    /// - `Err(AppError::BadRequest)` - Empty room number, negative price or capacity below 1
    /// - `Err(AppError::NotFound)` - Referenced hotel does not exist
    pub async fn create(&self, params: CreateRoomParams) -> Result<Room, AppError> {
        validate_room(&params.room_number, params.price, params.capacity)?;
        self.ensure_hotel_exists(params.hotel_id).await?;

        let room = RoomRepository::new(self.db).create(params).await?;
        tracing::info!(room_id = room.id, hotel_id = room.hotel_id, "Room created");

        Ok(room)
    }

    pub async fn get_all(&self) -> Result<Vec<Room>, AppError> {
        Ok(RoomRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Room, AppError> {
        RoomRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(ROOM_NOT_FOUND.to_string()))
    }

    /// Replaces a room's fields, including the hotel it belongs to.
    ///
    /// # Returns
    /// - `Ok(Room)` - Updated room
    /// - `Err(AppError::BadRequest)` - Invalid fields
    /// - `Err(AppError::NotFound)` - Room or new hotel does not exist
    pub async fn update(&self, params: UpdateRoomParams) -> Result<Room, AppError> {
        validate_room(&params.room_number, params.price, params.capacity)?;
        self.ensure_hotel_exists(params.hotel_id).await?;

        RoomRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(ROOM_NOT_FOUND.to_string()))
    }

    /// Deletes a room that has never been booked.
    ///
    /// Cancelled bookings count too; the booking history must keep its room.
    ///
    /// # Returns
    /// - `Ok(())` - Room deleted
    /// - `Err(AppError::BadRequest)` - Room has bookings
    /// - `Err(AppError::NotFound)` - No room with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if BookingRepository::new(self.db).exists_for_room(id).await? {
            return Err(AppError::BadRequest(ROOM_HAS_BOOKINGS.to_string()));
        }

        // A booking inserted after the check still trips the foreign key
        let deleted = match RoomRepository::new(self.db).delete(id).await {
            Err(err)
                if matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) =>
            {
                return Err(AppError::BadRequest(ROOM_HAS_BOOKINGS.to_string()));
            }
            other => other?,
        };
        if !deleted {
            return Err(AppError::NotFound(ROOM_NOT_FOUND.to_string()));
        }

        tracing::info!(room_id = id, "Room deleted");

        Ok(())
    }

    /// Lists rooms free for the whole requested range that match the catalog filters.
    pub async fn find_available(&self, filter: AvailableRoomsFilter) -> Result<Vec<Room>, AppError> {
        AvailabilityService::new(self.db)
            .find_available_rooms(&filter)
            .await
    }

    async fn ensure_hotel_exists(&self, hotel_id: i32) -> Result<(), AppError> {
        if !HotelRepository::new(self.db).exists(hotel_id).await? {
            return Err(AppError::NotFound(HOTEL_NOT_FOUND.to_string()));
        }

        Ok(())
    }
}

fn validate_room(room_number: &str, price: f64, capacity: i32) -> Result<(), AppError> {
    if room_number.trim().is_empty() {
        return Err(AppError::BadRequest("Room number is required".to_string()));
    }
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::BadRequest(
            "Price must be a non-negative number".to_string(),
        ));
    }
    if capacity < 1 {
        return Err(AppError::BadRequest(
            "Capacity must be at least 1".to_string(),
        ));
    }

    Ok(())
}
