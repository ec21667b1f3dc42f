use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct CreateRoomDto {
    pub hotel_id: i32,
    pub room_number: String,
    pub price: f64,
    pub capacity: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct UpdateRoomDto {
    pub hotel_id: i32,
    pub room_number: String,
    pub price: f64,
    pub capacity: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct RoomDto {
    pub id: i32,
    pub hotel_id: i32,
    pub room_number: String,
    pub price: f64,
    pub capacity: i32,
}
