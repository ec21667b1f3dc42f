//! Hotel catalog service.
//!
//! Validates hotel input and maps missing rows to 404s. Access control happens in the
//! controller before any of these methods run.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::{booking::BookingRepository, hotel::HotelRepository},
    error::AppError,
    model::hotel::{CreateHotelParams, Hotel, HotelFilter, UpdateHotelParams},
};

const HOTEL_NOT_FOUND: &str = "Hotel not found";
const HOTEL_HAS_BOOKINGS: &str = "Hotel has booked rooms and cannot be deleted";

pub struct HotelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a hotel.
    ///
    /// # Returns
    /// - `Ok(Hotel)` - Created hotel
    /// - `Err(AppError::BadRequest)` - Empty name or location, or negative base price
    pub async fn create(&self, params: CreateHotelParams) -> Result<Hotel, AppError> {
        validate_hotel(&params.name, &params.location, params.base_price)?;

        let hotel = HotelRepository::new(self.db).create(params).await?;
        tracing::info!(hotel_id = hotel.id, "Hotel created");

        Ok(hotel)
    }

    pub async fn get_all(&self, filter: HotelFilter) -> Result<Vec<Hotel>, AppError> {
        Ok(HotelRepository::new(self.db).get_all(&filter).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Hotel, AppError> {
        HotelRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(HOTEL_NOT_FOUND.to_string()))
    }

    /// Replaces a hotel's fields.
    ///
    /// # Returns
    /// - `Ok(Hotel)` - Updated hotel
    /// - `Err(AppError::BadRequest)` - Invalid fields
    /// - `Err(AppError::NotFound)` - No hotel with that id
    pub async fn update(&self, params: UpdateHotelParams) -> Result<Hotel, AppError> {
        validate_hotel(&params.name, &params.location, params.base_price)?;

        HotelRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(HOTEL_NOT_FOUND.to_string()))
    }

    /// Deletes a hotel together with its rooms.
    ///
    /// Refused while any of its rooms has a booking, cancelled ones included.
    ///
    /// # Returns
    /// - `Ok(())` - Hotel and rooms deleted
    /// - `Err(AppError::BadRequest)` - A room of the hotel has bookings
    /// - `Err(AppError::NotFound)` - No hotel with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if BookingRepository::new(self.db).exists_for_hotel(id).await? {
            return Err(AppError::BadRequest(HOTEL_HAS_BOOKINGS.to_string()));
        }

        let deleted = match HotelRepository::new(self.db).delete(id).await {
            Err(err)
                if matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) =>
            {
                return Err(AppError::BadRequest(HOTEL_HAS_BOOKINGS.to_string()));
            }
            other => other?,
        };
        if !deleted {
            return Err(AppError::NotFound(HOTEL_NOT_FOUND.to_string()));
        }

        tracing::info!(hotel_id = id, "Hotel deleted");

        Ok(())
    }
}

fn validate_hotel(name: &str, location: &str, base_price: Option<f64>) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Hotel name is required".to_string()));
    }
    if location.trim().is_empty() {
        return Err(AppError::BadRequest("Hotel location is required".to_string()));
    }
    if base_price.is_some_and(|price| !price.is_finite() || price < 0.0) {
        return Err(AppError::BadRequest(
            "Base price must be a non-negative number".to_string(),
        ));
    }

    Ok(())
}
