//! Booking domain models, status state machine and the date-range overlap rule.

use chrono::{DateTime, NaiveDate, Utc};
use std::str::FromStr;

use crate::{
    model::booking::{BookingDetailsDto, BookingDto, BookingStatusDto},
    server::error::{booking::BookingError, internal::InternalError, AppError},
};

/// Lifecycle of a booking: `Booked -> Cancelled`, nothing leaves `Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Booked,
    Cancelled,
}

impl BookingStatus {
    /// Value stored in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Booked => "booked",
            Self::Cancelled => "cancelled",
        }
    }

    /// Only active bookings block a room.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Booked)
    }

    pub fn into_dto(self) -> BookingStatusDto {
        match self {
            Self::Booked => BookingStatusDto::Booked,
            Self::Cancelled => BookingStatusDto::Cancelled,
        }
    }
}

impl FromStr for BookingStatus {
    type Err = InternalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "booked" => Ok(Self::Booked),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(InternalError::UnknownBookingStatus {
                value: other.to_string(),
            }),
        }
    }
}

/// Calendar date range with both ends inclusive.
///
/// Invariant: `start <= end`. A range where `start == end` covers a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// # Returns
    /// - `Ok(DateRange)` - `start <= end`
    /// - `Err(BookingError::InvalidRange)` - `start` is after `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, BookingError> {
        if start > end {
            return Err(BookingError::InvalidRange { start, end });
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether the two ranges share at least one calendar day.
    ///
    /// Boundaries are inclusive, so a range ending on the day another starts
    /// overlaps it (no same-day turnover). This is the one predicate used by both
    /// the booking conflict check and the available-rooms search.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        !(other.end < self.start || other.start > self.end)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub room_id: i32,
    pub range: DateRange,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Converts an entity model to a booking domain model at the repository boundary.
    ///
    /// Stored rows with `start_date > end_date` cannot be produced by the ledger and
    /// surface as an internal error.
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, AppError> {
        let range = DateRange::new(entity.start_date, entity.end_date).map_err(|_| {
            InternalError::InvalidStoredRange {
                booking_id: entity.id,
                start: entity.start_date,
                end: entity.end_date,
            }
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            room_id: entity.room_id,
            range,
            status: entity.status.parse()?,
            created_at: entity.created_at,
        })
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            user_id: self.user_id,
            room_id: self.room_id,
            start_date: self.range.start(),
            end_date: self.range.end(),
            status: self.status.into_dto(),
        }
    }
}

/// Booking enriched with denormalized room and hotel display fields.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingWithDetails {
    pub booking: Booking,
    pub room_number: String,
    pub hotel_name: String,
    pub location: String,
}

impl BookingWithDetails {
    pub fn into_dto(self) -> BookingDetailsDto {
        BookingDetailsDto {
            id: self.booking.id,
            user_id: self.booking.user_id,
            room_id: self.booking.room_id,
            start_date: self.booking.range.start(),
            end_date: self.booking.range.end(),
            status: self.booking.status.into_dto(),
            room_number: self.room_number,
            hotel_name: self.hotel_name,
            location: self.location,
        }
    }
}

/// Parameters for reserving a room. The range has already been validated.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub user_id: i32,
    pub room_id: i32,
    pub range: DateRange,
}

impl CreateBookingParams {
    /// Builds params from a request body, rejecting `start_date > end_date`.
    pub fn from_dto(
        user_id: i32,
        dto: crate::model::booking::CreateBookingDto,
    ) -> Result<Self, BookingError> {
        Ok(Self {
            user_id,
            room_id: dto.room_id,
            range: DateRange::new(dto.start_date, dto.end_date)?,
        })
    }
}
