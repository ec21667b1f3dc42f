//! Shared helper utilities for factory methods.
//!
//! Provides ID generation used by every factory plus convenience methods for
//! creating entities together with their dependencies.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Parses an ISO `YYYY-MM-DD` date for test fixtures.
///
/// # Panics
/// Panics when `value` is not a valid calendar date.
pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .unwrap_or_else(|e| panic!("invalid test date '{}': {}", value, e))
}

/// Creates a hotel with one room.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((hotel, room))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_room_with_hotel(
    db: &DatabaseConnection,
) -> Result<(entity::hotel::Model, entity::room::Model), DbErr> {
    let hotel = crate::factory::hotel::create_hotel(db).await?;
    let room = crate::factory::room::create_room(db, hotel.id).await?;

    Ok((hotel, room))
}

/// Creates a complete booking hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User (as booking owner)
/// 2. Hotel
/// 3. Room
/// 4. Booking (active, default dates)
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, hotel, room, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::hotel::Model,
        entity::room::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let (hotel, room) = create_room_with_hotel(db).await?;
    let booking = crate::factory::booking::create_booking(db, user.id, room.id).await?;

    Ok((user, hotel, room, booking))
}
