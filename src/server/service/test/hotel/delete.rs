use super::*;
use crate::server::data::{booking::BookingRepository, room::RoomRepository};

/// Tests that deleting a hotel removes its rooms.
///
/// Expected: Ok(()) then the room lookup returns None
#[tokio::test]
async fn deletes_hotel_and_rooms() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (hotel, room) = factory::helpers::create_room_with_hotel(db).await?;

    HotelService::new(db).delete(hotel.id).await?;

    assert!(RoomRepository::new(db).find_by_id(room.id).await?.is_none());

    Ok(())
}

/// Tests that a hotel whose room was booked, even if later cancelled, is kept.
///
/// Expected: Err(AppError::BadRequest) with the room and booking still stored
#[tokio::test]
async fn keeps_hotel_with_booked_rooms() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let (hotel, room) = factory::helpers::create_room_with_hotel(db).await?;
    let booking = factory::booking::BookingFactory::new(db, user.id, room.id)
        .cancelled()
        .build()
        .await?;

    let result = HotelService::new(db).delete(hotel.id).await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Hotel has booked rooms and cannot be deleted"
    ));
    assert!(RoomRepository::new(db).find_by_id(room.id).await?.is_some());
    assert!(BookingRepository::new(db)
        .find_owned(booking.id, user.id)
        .await?
        .is_some());

    Ok(())
}

/// Expected: Err(AppError::NotFound) for a missing hotel
#[tokio::test]
async fn missing_hotel_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = HotelService::new(db).delete(5).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
