//! Hotel factory for creating test hotel entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test hotels with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let hotel = HotelFactory::new(&db)
///     .location("Mumbai")
///     .base_price(Some(4000.0))
///     .build()
///     .await?;
/// ```
pub struct HotelFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    location: String,
    description: String,
    base_price: Option<f64>,
}

impl<'a> HotelFactory<'a> {
    /// Creates a new HotelFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Hotel {id}"`
    /// - location: `"Test City"`
    /// - description: `"Test hotel description"`
    /// - base_price: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Hotel {}", id),
            location: "Test City".to_string(),
            description: "Test hotel description".to_string(),
            base_price: None,
        }
    }

    /// Sets the hotel name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the hotel location.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the optional base price.
    pub fn base_price(mut self, base_price: Option<f64>) -> Self {
        self.base_price = base_price;
        self
    }

    /// Builds and inserts the hotel entity into the database.
    pub async fn build(self) -> Result<entity::hotel::Model, DbErr> {
        entity::hotel::ActiveModel {
            name: ActiveValue::Set(self.name),
            location: ActiveValue::Set(self.location),
            description: ActiveValue::Set(self.description),
            base_price: ActiveValue::Set(self.base_price),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hotel with default values.
pub async fn create_hotel(db: &DatabaseConnection) -> Result<entity::hotel::Model, DbErr> {
    HotelFactory::new(db).build().await
}
