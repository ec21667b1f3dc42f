use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct CreateBookingDto {
    pub room_id: i32,
    /// First night, `YYYY-MM-DD`.
    pub start_date: NaiveDate,
    /// Last day, `YYYY-MM-DD`, inclusive.
    pub end_date: NaiveDate,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatusDto {
    Booked,
    Cancelled,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct BookingDto {
    pub id: i32,
    pub user_id: i32,
    pub room_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: BookingStatusDto,
}

/// Booking joined with the room and hotel it refers to.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct BookingDetailsDto {
    pub id: i32,
    pub user_id: i32,
    pub room_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: BookingStatusDto,
    pub room_number: String,
    pub hotel_name: String,
    pub location: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct BookingCreatedDto {
    pub message: String,
    pub booking: BookingDto,
}
