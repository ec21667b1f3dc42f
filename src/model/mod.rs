//! Request and response DTOs exchanged with API clients.

pub mod api;
pub mod auth;
pub mod booking;
pub mod hotel;
pub mod room;
pub mod user;
