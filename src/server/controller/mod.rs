//! HTTP handlers.
//!
//! Each handler runs its `AuthGuard` check first, converts the request DTO into
//! service params, calls one service and converts the domain result back into a DTO.

pub mod auth;
pub mod booking;
pub mod hotel;
pub mod room;
