//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Catalog validation, account rules and the booking ledger
//! - **Orchestration**: Coordinating multiple repository calls within one transaction
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Serialization**: Holding the per-room lock across a booking's check-then-insert

pub mod admin;
pub mod auth;
pub mod availability;
pub mod booking;
pub mod hotel;
pub mod room;
pub mod room_lock;

#[cfg(test)]
mod test;
