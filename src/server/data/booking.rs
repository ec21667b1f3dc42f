//! Booking data repository for database operations.
//!
//! This module provides the `BookingRepository` used by the booking ledger. Reads of
//! active bookings and the insert that follows them are expected to run on the same
//! `DatabaseTransaction`, which is why the repository is generic over `ConnectionTrait`.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::{
    data::hotel::HotelRepository,
    error::{internal::InternalError, AppError},
    model::booking::{Booking, BookingStatus, BookingWithDetails, CreateBookingParams},
};

/// Repository providing database operations for bookings.
pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    /// Creates a new BookingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    ///
    /// # Returns
    /// - `BookingRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a booking with status `booked`.
    ///
    /// Performs no availability check; the booking service calls this only after
    /// confirming that no active booking overlaps, on the same transaction.
    ///
    /// # Arguments
    /// - `params` - Owner, room and validated date range
    ///
    /// # Returns
    /// - `Ok(Booking)` - The inserted booking
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: &CreateBookingParams) -> Result<Booking, AppError> {
        let entity = entity::booking::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            room_id: ActiveValue::Set(params.room_id),
            start_date: ActiveValue::Set(params.range.start()),
            end_date: ActiveValue::Set(params.range.end()),
            status: ActiveValue::Set(BookingStatus::Booked.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Booking::from_entity(entity)
    }

    /// Loads every active booking for a single room.
    pub async fn get_active_by_room(&self, room_id: i32) -> Result<Vec<Booking>, AppError> {
        self.get_active_by_rooms(&[room_id]).await
    }

    /// Loads every active booking for any of `room_ids`.
    ///
    /// Cancelled bookings are filtered out in the query; they never block a room.
    pub async fn get_active_by_rooms(&self, room_ids: &[i32]) -> Result<Vec<Booking>, AppError> {
        if room_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::RoomId.is_in(room_ids.iter().copied()))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Booked.as_str()))
            .all(self.db)
            .await?;

        entities.into_iter().map(Booking::from_entity).collect()
    }

    /// Checks whether a room has any booking, active or cancelled.
    pub async fn exists_for_room(&self, room_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::RoomId.eq(room_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any room of a hotel has a booking, active or cancelled.
    pub async fn exists_for_hotel(&self, hotel_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::booking::Relation::Room.def(),
            )
            .filter(entity::room::Column::HotelId.eq(hotel_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds a booking by id, scoped to its owner.
    ///
    /// A booking owned by someone else is indistinguishable from a missing one.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - Booking exists and belongs to `user_id`
    /// - `Ok(None)` - No such booking for this user
    pub async fn find_owned(&self, id: i32, user_id: i32) -> Result<Option<Booking>, AppError> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::Id.eq(id))
            .filter(entity::booking::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
            .map(Booking::from_entity)
            .transpose()
    }

    /// Sets the status of a booking.
    pub async fn update_status(&self, id: i32, status: BookingStatus) -> Result<(), AppError> {
        entity::prelude::Booking::update_many()
            .filter(entity::booking::Column::Id.eq(id))
            .col_expr(
                entity::booking::Column::Status,
                sea_orm::sea_query::Expr::value(status.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Lists a user's bookings with room and hotel display fields.
    ///
    /// Ordered by `start_date` descending, then id descending. Rooms with bookings
    /// cannot be deleted, so every row resolves to a room and hotel.
    pub async fn get_by_user_with_details(
        &self,
        user_id: i32,
    ) -> Result<Vec<BookingWithDetails>, AppError> {
        let rows = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Room)
            .order_by_desc(entity::booking::Column::StartDate)
            .order_by_desc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        self.attach_details(rows).await
    }

    /// Finds one of a user's bookings with room and hotel display fields.
    pub async fn find_owned_with_details(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<BookingWithDetails>, AppError> {
        let rows = entity::prelude::Booking::find()
            .filter(entity::booking::Column::Id.eq(id))
            .filter(entity::booking::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Room)
            .all(self.db)
            .await?;

        Ok(self.attach_details(rows).await?.into_iter().next())
    }

    async fn attach_details(
        &self,
        rows: Vec<(entity::booking::Model, Option<entity::room::Model>)>,
    ) -> Result<Vec<BookingWithDetails>, AppError> {
        let mut hotel_ids: Vec<i32> = rows
            .iter()
            .filter_map(|(_, room)| room.as_ref().map(|r| r.hotel_id))
            .collect();
        hotel_ids.sort_unstable();
        hotel_ids.dedup();

        let hotels: HashMap<i32, _> = HotelRepository::new(self.db)
            .find_by_ids(&hotel_ids)
            .await?
            .into_iter()
            .map(|hotel| (hotel.id, hotel))
            .collect();

        rows.into_iter()
            .map(|(booking, room)| {
                let booking_id = booking.id;
                let (room, hotel) = room
                    .and_then(|room| hotels.get(&room.hotel_id).map(|hotel| (room, hotel)))
                    .ok_or(InternalError::DanglingBooking { booking_id })?;

                Ok(BookingWithDetails {
                    booking: Booking::from_entity(booking)?,
                    room_number: room.room_number,
                    hotel_name: hotel.name.clone(),
                    location: hotel.location.clone(),
                })
            })
            .collect()
    }
}
