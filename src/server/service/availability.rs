//! Availability checker shared by booking creation and the available-rooms search.
//!
//! Both paths decide "is this room free for this range" with `DateRange::overlaps`
//! against the room's active bookings, so a room listed as available is never
//! rejected as a conflict for the same range (absent concurrent bookings).

use sea_orm::ConnectionTrait;
use std::collections::HashSet;

use crate::server::{
    data::{booking::BookingRepository, room::RoomRepository},
    error::AppError,
    model::{
        booking::{Booking, DateRange},
        room::{AvailableRoomsFilter, Room},
    },
};

/// Whether any active booking in `bookings` overlaps `range`.
///
/// Cancelled bookings are skipped even if the caller passes them in.
pub fn has_overlap(bookings: &[Booking], range: &DateRange) -> bool {
    bookings
        .iter()
        .filter(|booking| booking.is_active())
        .any(|booking| booking.range.overlaps(range))
}

pub struct AvailabilityService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AvailabilityService<'a, C> {
    /// Creates a new AvailabilityService.
    ///
    /// # Arguments
    /// - `db` - Connection pool, or the booking transaction when called from `create`
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Whether `room_id` has no active booking overlapping `range`.
    ///
    /// A room with no bookings at all, including an unknown room id, is available.
    pub async fn is_available(&self, room_id: i32, range: &DateRange) -> Result<bool, AppError> {
        let bookings = BookingRepository::new(self.db)
            .get_active_by_room(room_id)
            .await?;

        Ok(!has_overlap(&bookings, range))
    }

    /// Lists rooms matching the catalog constraints that are free for the range.
    ///
    /// Loads the candidate rooms and all of their active bookings in two queries,
    /// then drops every room with an overlapping booking. Result keeps room id order.
    pub async fn find_available_rooms(
        &self,
        filter: &AvailableRoomsFilter,
    ) -> Result<Vec<Room>, AppError> {
        let rooms = RoomRepository::new(self.db).search(&filter.search).await?;
        let room_ids: Vec<i32> = rooms.iter().map(|room| room.id).collect();

        let bookings = BookingRepository::new(self.db)
            .get_active_by_rooms(&room_ids)
            .await?;

        let blocked: HashSet<i32> = bookings
            .iter()
            .filter(|booking| booking.is_active() && booking.range.overlaps(&filter.range))
            .map(|booking| booking.room_id)
            .collect();

        Ok(rooms
            .into_iter()
            .filter(|room| !blocked.contains(&room.id))
            .collect())
    }
}
