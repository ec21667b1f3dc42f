//! SeaORM entity definitions for the booking database.

pub mod prelude;

pub mod auth_token;
pub mod booking;
pub mod hotel;
pub mod room;
pub mod user;
