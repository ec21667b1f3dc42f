use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::hotel::HotelRepository,
    model::hotel::{CreateHotelParams, HotelFilter, UpdateHotelParams},
};

mod get_all;
mod update;
