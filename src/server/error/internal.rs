use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored role column holds a value other than `user` or `admin`.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown role '{value}' stored for user")]
    UnknownRole {
        /// The stored value that failed to parse
        value: String,
    },

    /// Stored booking status holds a value other than `booked` or `cancelled`.
    #[error("Unknown booking status '{value}'")]
    UnknownBookingStatus {
        /// The stored value that failed to parse
        value: String,
    },

    /// Stored booking row ends before it starts.
    #[error("Booking {booking_id} has start date {start} after end date {end}")]
    InvalidStoredRange {
        booking_id: i32,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    /// Booking references a room or hotel row that no longer exists.
    #[error("Booking {booking_id} references a missing room or hotel")]
    DanglingBooking { booking_id: i32 },

    /// Argon2 failed to hash or parse a password hash.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}
