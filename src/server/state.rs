//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use super::service::{admin::code::AdminCodeService, room_lock::RoomLocks};

/// Application state containing shared resources and dependencies.
///
/// Every field is cheap to clone: the connection is a pool handle and both services
/// share their inner state through `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// One-time bootstrap code for registering the first admin.
    pub admin_code_service: AdminCodeService,

    /// Per-room locks serializing booking creation.
    ///
    /// Must be the same registry for every request, otherwise two overlapping
    /// bookings for one room could be checked concurrently.
    pub room_locks: RoomLocks,

    /// Lifetime of bearer tokens issued at login.
    pub token_ttl: chrono::Duration,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `admin_code_service` - Service for managing admin codes
    /// - `token_ttl` - Lifetime of issued bearer tokens
    ///
    /// # Returns
    /// - `AppState` - Initialized application state with an empty lock registry
    pub fn new(
        db: DatabaseConnection,
        admin_code_service: AdminCodeService,
        token_ttl: chrono::Duration,
    ) -> Self {
        Self {
            db,
            admin_code_service,
            room_locks: RoomLocks::new(),
            token_ttl,
        }
    }
}
