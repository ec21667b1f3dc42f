use test_utils::{builder::TestBuilder, factory, factory::helpers::date};

use crate::{
    model::booking::CreateBookingDto,
    server::{
        error::{booking::BookingError, AppError},
        model::booking::{BookingStatus, CreateBookingParams, DateRange},
        service::{booking::BookingService, room_lock::RoomLocks},
    },
};

mod cancel;
mod create;
mod create_concurrent;
mod get_for_user;

fn params(user_id: i32, room_id: i32, start: &str, end: &str) -> CreateBookingParams {
    CreateBookingParams {
        user_id,
        room_id,
        range: DateRange::new(date(start), date(end)).unwrap(),
    }
}
