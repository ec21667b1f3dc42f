//! Booking factory for creating test booking entities.
//!
//! Inserts rows directly, bypassing the availability check, so tests can set up
//! arbitrary (including cancelled) booking histories.

use crate::factory::helpers::date;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let booking = BookingFactory::new(&db, user.id, room.id)
///     .dates("2025-06-01", "2025-06-03")
///     .cancelled()
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    room_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: String,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - start_date: `2025-05-01`
    /// - end_date: `2025-05-05`
    /// - status: `"booked"`
    pub fn new(db: &'a DatabaseConnection, user_id: i32, room_id: i32) -> Self {
        Self {
            db,
            user_id,
            room_id,
            start_date: date("2025-05-01"),
            end_date: date("2025-05-05"),
            status: "booked".to_string(),
        }
    }

    /// Sets the inclusive date range from ISO `YYYY-MM-DD` strings.
    pub fn dates(mut self, start_date: &str, end_date: &str) -> Self {
        self.start_date = date(start_date);
        self.end_date = date(end_date);
        self
    }

    /// Marks the booking as cancelled.
    pub fn cancelled(mut self) -> Self {
        self.status = "cancelled".to_string();
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            room_id: ActiveValue::Set(self.room_id),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active booking with default dates.
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: i32,
    room_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user_id, room_id).build().await
}
