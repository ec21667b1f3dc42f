//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms belonging to a hotel.
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    hotel_id: i32,
    room_number: String,
    price: f64,
    capacity: i32,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - room_number: `"{id}"`
    /// - price: `100.0`
    /// - capacity: `2`
    pub fn new(db: &'a DatabaseConnection, hotel_id: i32) -> Self {
        Self {
            db,
            hotel_id,
            room_number: next_id().to_string(),
            price: 100.0,
            capacity: 2,
        }
    }

    /// Sets the room number label.
    pub fn room_number(mut self, room_number: impl Into<String>) -> Self {
        self.room_number = room_number.into();
        self
    }

    /// Sets the nightly price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the guest capacity.
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builds and inserts the room entity into the database.
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            hotel_id: ActiveValue::Set(self.hotel_id),
            room_number: ActiveValue::Set(self.room_number),
            price: ActiveValue::Set(self.price),
            capacity: ActiveValue::Set(self.capacity),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values in the given hotel.
pub async fn create_room(
    db: &DatabaseConnection,
    hotel_id: i32,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, hotel_id).build().await
}
