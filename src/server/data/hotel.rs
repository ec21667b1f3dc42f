//! Hotel data repository for database operations.
//!
//! This module provides the `HotelRepository` for hotel catalog records, including the
//! filtered listing used by `GET /api/hotels`.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::hotel::{CreateHotelParams, Hotel, HotelFilter, UpdateHotelParams};

/// Repository providing database operations for hotels.
pub struct HotelRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HotelRepository<'a, C> {
    /// Creates a new HotelRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    ///
    /// # Returns
    /// - `HotelRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new hotel.
    ///
    /// # Returns
    /// - `Ok(Hotel)` - The created hotel
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateHotelParams) -> Result<Hotel, DbErr> {
        let entity = entity::hotel::ActiveModel {
            name: ActiveValue::Set(params.name),
            location: ActiveValue::Set(params.location),
            description: ActiveValue::Set(params.description),
            base_price: ActiveValue::Set(params.base_price),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Hotel::from_entity(entity))
    }

    /// Lists hotels matching `filter`, ordered by id ascending.
    ///
    /// `location` is applied as `LIKE %location%`. Price bounds compare against
    /// `base_price`; rows with a null base price never satisfy a comparison, so they
    /// drop out as soon as either bound is given.
    ///
    /// # Arguments
    /// - `filter` - Optional location substring and inclusive price bounds
    ///
    /// # Returns
    /// - `Ok(Vec<Hotel>)` - Matching hotels (possibly empty)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, filter: &HotelFilter) -> Result<Vec<Hotel>, DbErr> {
        let mut query = entity::prelude::Hotel::find();

        if let Some(location) = &filter.location {
            query = query.filter(entity::hotel::Column::Location.contains(location));
        }
        if let Some(min_price) = filter.min_price {
            query = query.filter(entity::hotel::Column::BasePrice.gte(min_price));
        }
        if let Some(max_price) = filter.max_price {
            query = query.filter(entity::hotel::Column::BasePrice.lte(max_price));
        }

        let entities = query
            .order_by_asc(entity::hotel::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Hotel::from_entity).collect())
    }

    /// Finds a hotel by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Hotel>, DbErr> {
        let entity = entity::prelude::Hotel::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Hotel::from_entity))
    }

    /// Finds every hotel whose id is in `ids`.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Hotel>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Hotel::find()
            .filter(entity::hotel::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Hotel::from_entity).collect())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Hotel::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Replaces every field of an existing hotel.
    ///
    /// # Returns
    /// - `Ok(Some(Hotel))` - Updated hotel
    /// - `Ok(None)` - No hotel with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateHotelParams) -> Result<Option<Hotel>, DbErr> {
        let Some(existing) = entity::prelude::Hotel::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::hotel::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.location = ActiveValue::Set(params.location);
        active.description = ActiveValue::Set(params.description);
        active.base_price = ActiveValue::Set(params.base_price);

        let entity = active.update(self.db).await?;

        Ok(Some(Hotel::from_entity(entity)))
    }

    /// Deletes a hotel; its rooms go with it through the cascading foreign key.
    ///
    /// Fails with a foreign key violation while any of those rooms has bookings.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Hotel::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
