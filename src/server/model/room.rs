//! Room domain models and parameters.

use crate::{
    model::room::{CreateRoomDto, RoomDto, UpdateRoomDto},
    server::model::booking::DateRange,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub hotel_id: i32,
    pub room_number: String,
    pub price: f64,
    pub capacity: i32,
}

impl Room {
    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            id: entity.id,
            hotel_id: entity.hotel_id,
            room_number: entity.room_number,
            price: entity.price,
            capacity: entity.capacity,
        }
    }

    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.id,
            hotel_id: self.hotel_id,
            room_number: self.room_number,
            price: self.price,
            capacity: self.capacity,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoomParams {
    pub hotel_id: i32,
    pub room_number: String,
    pub price: f64,
    pub capacity: i32,
}

impl CreateRoomParams {
    pub fn from_dto(dto: CreateRoomDto) -> Self {
        Self {
            hotel_id: dto.hotel_id,
            room_number: dto.room_number,
            price: dto.price,
            capacity: dto.capacity,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateRoomParams {
    pub id: i32,
    pub hotel_id: i32,
    pub room_number: String,
    pub price: f64,
    pub capacity: i32,
}

impl UpdateRoomParams {
    pub fn from_dto(id: i32, dto: UpdateRoomDto) -> Self {
        Self {
            id,
            hotel_id: dto.hotel_id,
            room_number: dto.room_number,
            price: dto.price,
            capacity: dto.capacity,
        }
    }
}

/// Catalog constraints applied before the availability check.
#[derive(Debug, Clone, Default)]
pub struct RoomSearch {
    /// Substring of the owning hotel's location.
    pub location: Option<String>,
    /// Inclusive lower bound on room price.
    pub min_price: Option<f64>,
    /// Inclusive upper bound on room price.
    pub max_price: Option<f64>,
}

/// Rooms free for `range` that also match `search`.
#[derive(Debug, Clone)]
pub struct AvailableRoomsFilter {
    pub range: DateRange,
    pub search: RoomSearch,
}
