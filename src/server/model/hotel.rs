//! Hotel domain models and parameters.

use crate::model::hotel::{CreateHotelDto, HotelDto, UpdateHotelDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub description: String,
    pub base_price: Option<f64>,
}

impl Hotel {
    pub fn from_entity(entity: entity::hotel::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            location: entity.location,
            description: entity.description,
            base_price: entity.base_price,
        }
    }

    pub fn into_dto(self) -> HotelDto {
        HotelDto {
            id: self.id,
            name: self.name,
            location: self.location,
            description: self.description,
            base_price: self.base_price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateHotelParams {
    pub name: String,
    pub location: String,
    pub description: String,
    pub base_price: Option<f64>,
}

impl CreateHotelParams {
    pub fn from_dto(dto: CreateHotelDto) -> Self {
        Self {
            name: dto.name,
            location: dto.location,
            description: dto.description,
            base_price: dto.base_price,
        }
    }
}

/// Full replacement of a hotel's fields.
#[derive(Debug, Clone)]
pub struct UpdateHotelParams {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub description: String,
    pub base_price: Option<f64>,
}

impl UpdateHotelParams {
    pub fn from_dto(id: i32, dto: UpdateHotelDto) -> Self {
        Self {
            id,
            name: dto.name,
            location: dto.location,
            description: dto.description,
            base_price: dto.base_price,
        }
    }
}

/// Optional filters for the hotel listing.
///
/// `location` is a substring match; the price bounds are inclusive and apply to
/// `base_price`, so hotels without a base price never satisfy a price bound.
#[derive(Debug, Clone, Default)]
pub struct HotelFilter {
    pub location: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}
