use super::*;
use crate::server::{
    model::booking::CreateBookingParams,
    service::{booking::BookingService, room_lock::RoomLocks},
};

/// Tests deleting a room nobody has booked.
///
/// Expected: Ok(()) then the room lookup is NotFound
#[tokio::test]
async fn deletes_unbooked_room() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, room) = factory::helpers::create_room_with_hotel(db).await?;
    let service = RoomService::new(db);

    service.delete(room.id).await?;

    assert!(matches!(
        service.get_by_id(room.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that a cancelled booking still keeps its room from being deleted.
///
/// Expected: Err(AppError::BadRequest) and the owner's history unchanged
#[tokio::test]
async fn keeps_room_with_booking_history() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLocks::new();
    let user = factory::create_user(db).await?;
    let (_, room) = factory::helpers::create_room_with_hotel(db).await?;
    let bookings = BookingService::new(db, &locks);

    let booking = bookings
        .create(CreateBookingParams {
            user_id: user.id,
            room_id: room.id,
            range: DateRange::new(date("2025-04-01"), date("2025-04-03")).unwrap(),
        })
        .await?;
    bookings.cancel(booking.id, user.id).await?;

    let result = RoomService::new(db).delete(room.id).await;

    assert!(matches!(
        result,
        Err(AppError::BadRequest(msg)) if msg == "Room has bookings and cannot be deleted"
    ));

    let history = bookings.list_for_user(user.id).await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].booking.id, booking.id);
    assert_eq!(history[0].room_number, room.room_number);

    Ok(())
}

/// Expected: Err(AppError::NotFound("Room not found"))
#[tokio::test]
async fn missing_room_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RoomService::new(db).delete(42).await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Room not found"));

    Ok(())
}
