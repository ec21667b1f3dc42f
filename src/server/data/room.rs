//! Room data repository for database operations.
//!
//! This module provides the `RoomRepository` for room records, including the catalog
//! search that joins rooms to their owning hotel for location filtering.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::room::{CreateRoomParams, Room, RoomSearch, UpdateRoomParams};

/// Repository providing database operations for rooms.
pub struct RoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new room. The caller has already checked that the hotel exists.
    pub async fn create(&self, params: CreateRoomParams) -> Result<Room, DbErr> {
        let entity = entity::room::ActiveModel {
            hotel_id: ActiveValue::Set(params.hotel_id),
            room_number: ActiveValue::Set(params.room_number),
            price: ActiveValue::Set(params.price),
            capacity: ActiveValue::Set(params.capacity),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Room::from_entity(entity))
    }

    /// Lists every room ordered by id ascending.
    pub async fn get_all(&self) -> Result<Vec<Room>, DbErr> {
        let entities = entity::prelude::Room::find()
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Room::from_entity).collect())
    }

    /// Finds a room by id.
    ///
    /// # Returns
    /// - `Ok(Some(Room))` - Room found
    /// - `Ok(None)` - No room with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Room>, DbErr> {
        let entity = entity::prelude::Room::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Room::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Room::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Replaces every field of an existing room.
    ///
    /// # Returns
    /// - `Ok(Some(Room))` - Updated room
    /// - `Ok(None)` - No room with that id
    pub async fn update(&self, params: UpdateRoomParams) -> Result<Option<Room>, DbErr> {
        let Some(existing) = entity::prelude::Room::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::room::ActiveModel = existing.into();
        active.hotel_id = ActiveValue::Set(params.hotel_id);
        active.room_number = ActiveValue::Set(params.room_number);
        active.price = ActiveValue::Set(params.price);
        active.capacity = ActiveValue::Set(params.capacity);

        let entity = active.update(self.db).await?;

        Ok(Some(Room::from_entity(entity)))
    }

    /// Deletes a room.
    ///
    /// Fails with a foreign key violation while any booking references the room.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Room::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Lists rooms matching the catalog constraints of an availability search.
    ///
    /// Joins each room to its hotel so `location` can be matched as a substring of the
    /// hotel's location. Price bounds are inclusive and apply to the room price.
    /// Date availability is not considered here.
    pub async fn search(&self, search: &RoomSearch) -> Result<Vec<Room>, DbErr> {
        let mut query = entity::prelude::Room::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::room::Relation::Hotel.def(),
            );

        if let Some(location) = &search.location {
            query = query.filter(entity::hotel::Column::Location.contains(location));
        }
        if let Some(min_price) = search.min_price {
            query = query.filter(entity::room::Column::Price.gte(min_price));
        }
        if let Some(max_price) = search.max_price {
            query = query.filter(entity::room::Column::Price.lte(max_price));
        }

        let entities = query
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Room::from_entity).collect())
    }
}
