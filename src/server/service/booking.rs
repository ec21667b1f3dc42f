//! Booking ledger service.
//!
//! Owns the only write path into the `booking` table. Creation serializes per room
//! through `RoomLocks` and runs its availability check and insert on one database
//! transaction, so two overlapping requests for the same room can never both succeed.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{booking::BookingRepository, room::RoomRepository},
    error::{booking::BookingError, AppError},
    model::booking::{Booking, BookingStatus, BookingWithDetails, CreateBookingParams},
    service::{availability::AvailabilityService, room_lock::RoomLocks},
};

/// Service providing the booking ledger operations.
pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    room_locks: &'a RoomLocks,
}

impl<'a> BookingService<'a> {
    /// Creates a new BookingService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `room_locks` - Shared per-room lock registry from `AppState`
    pub fn new(db: &'a DatabaseConnection, room_locks: &'a RoomLocks) -> Self {
        Self { db, room_locks }
    }

    /// Reserves a room for the caller.
    ///
    /// The date range was validated when `params` was built. Holds the room's lock
    /// while a transaction checks that the room exists, checks for overlapping active
    /// bookings and inserts the new booking.
    ///
    /// # Arguments
    /// - `params` - Caller, room and validated date range
    ///
    /// # Returns
    /// - `Ok(Booking)` - Newly created booking with status `Booked`
    /// - `Err(AppError::NotFound)` - Room does not exist
    /// - `Err(AppError::BookingErr(Conflict))` - An active booking overlaps the range
    /// - `Err(AppError::DbErr)` - Database error; nothing was written
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, AppError> {
        let _room_guard = self.room_locks.acquire(params.room_id).await;

        let txn = self.db.begin().await?;

        if !RoomRepository::new(&txn).exists(params.room_id).await? {
            txn.rollback().await?;
            return Err(AppError::NotFound("Room not found".to_string()));
        }

        let available = AvailabilityService::new(&txn)
            .is_available(params.room_id, &params.range)
            .await?;

        if !available {
            txn.rollback().await?;
            tracing::info!(
                room_id = params.room_id,
                user_id = params.user_id,
                start = %params.range.start(),
                end = %params.range.end(),
                "Rejected overlapping booking"
            );
            return Err(BookingError::Conflict.into());
        }

        let booking = BookingRepository::new(&txn).create(&params).await?;
        txn.commit().await?;

        tracing::info!(
            booking_id = booking.id,
            room_id = booking.room_id,
            user_id = booking.user_id,
            "Booking created"
        );

        Ok(booking)
    }

    /// Lists every booking owned by `user_id`, including cancelled ones.
    ///
    /// Ordered by start date descending, then id descending.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<BookingWithDetails>, AppError> {
        BookingRepository::new(self.db)
            .get_by_user_with_details(user_id)
            .await
    }

    /// Returns one of the caller's bookings.
    ///
    /// # Returns
    /// - `Ok(BookingWithDetails)` - Booking owned by `user_id`
    /// - `Err(AppError::BookingErr(NotFound))` - Missing or owned by another user
    pub async fn get_for_user(
        &self,
        booking_id: i32,
        user_id: i32,
    ) -> Result<BookingWithDetails, AppError> {
        BookingRepository::new(self.db)
            .find_owned_with_details(booking_id, user_id)
            .await?
            .ok_or_else(|| BookingError::NotFound.into())
    }

    /// Cancels one of the caller's bookings.
    ///
    /// Cancelling an already cancelled booking succeeds without writing. The room
    /// lock is not taken: cancellation only ever frees dates.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Booking now in status `Cancelled`
    /// - `Err(AppError::BookingErr(NotFound))` - Missing or owned by another user
    pub async fn cancel(&self, booking_id: i32, user_id: i32) -> Result<Booking, AppError> {
        let repo = BookingRepository::new(self.db);

        let Some(mut booking) = repo.find_owned(booking_id, user_id).await? else {
            return Err(BookingError::NotFound.into());
        };

        if booking.status == BookingStatus::Cancelled {
            tracing::debug!(booking_id, "Booking already cancelled");
            return Ok(booking);
        }

        repo.update_status(booking.id, BookingStatus::Cancelled)
            .await?;
        booking.status = BookingStatus::Cancelled;

        tracing::info!(booking_id, user_id, "Booking cancelled");

        Ok(booking)
    }
}
