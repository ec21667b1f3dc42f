use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejections raised by the booking ledger.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    /// Requested range starts after it ends. Detected before any storage call.
    #[error("Start date {start} is after end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// An active booking on the same room overlaps the requested range.
    #[error("Room not available for selected dates")]
    Conflict,

    /// No booking with that id is owned by the caller.
    #[error("Booking not found")]
    NotFound,
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidRange { .. } | Self::Conflict => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
