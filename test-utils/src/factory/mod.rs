//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let (hotel, room) = factory::helpers::create_room_with_hotel(&db).await?;
//! let booking = factory::booking::BookingFactory::new(&db, user.id, room.id)
//!     .dates("2025-05-01", "2025-05-05")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `auth_token` - Create bearer token entities
//! - `hotel` - Create hotel entities
//! - `room` - Create room entities
//! - `booking` - Create booking entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod auth_token;
pub mod booking;
pub mod helpers;
pub mod hotel;
pub mod room;
pub mod user;

pub use auth_token::create_auth_token;
pub use booking::create_booking;
pub use hotel::create_hotel;
pub use room::create_room;
pub use user::{create_admin, create_user};
