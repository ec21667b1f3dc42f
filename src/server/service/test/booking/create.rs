use super::*;

/// Tests booking a free room.
///
/// Expected: Ok(Booking) with status Booked
#[tokio::test]
async fn books_free_room() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLocks::new();
    let user = factory::create_user(db).await?;
    let (_, room) = factory::helpers::create_room_with_hotel(db).await?;

    let booking = BookingService::new(db, &locks)
        .create(params(user.id, room.id, "2025-05-10", "2025-05-12"))
        .await?;

    assert_eq!(booking.status, BookingStatus::Booked);
    assert_eq!(booking.room_id, room.id);
    assert_eq!(booking.range.start(), date("2025-05-10"));

    Ok(())
}

/// Tests that an overlapping request is rejected and nothing is written.
///
/// Expected: Err(BookingError::Conflict) and still one booking on the room
#[tokio::test]
async fn rejects_overlapping_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLocks::new();
    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let (_, room) = factory::helpers::create_room_with_hotel(db).await?;
    let service = BookingService::new(db, &locks);

    service
        .create(params(user.id, room.id, "2025-05-01", "2025-05-05"))
        .await?;
    let result = service
        .create(params(other.id, room.id, "2025-05-03", "2025-05-04"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::Conflict))
    ));
    assert!(service.list_for_user(other.id).await?.is_empty());

    Ok(())
}

/// Tests that a booking on one room leaves other rooms bookable for the same dates.
///
/// Expected: Ok for room B with the exact range already booked on room A
#[tokio::test]
async fn other_rooms_unaffected_by_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLocks::new();
    let user = factory::create_user(db).await?;
    let (hotel, room_a) = factory::helpers::create_room_with_hotel(db).await?;
    let room_b = factory::create_room(db, hotel.id).await?;
    let service = BookingService::new(db, &locks);

    let first = service
        .create(params(user.id, room_a.id, "2025-05-10", "2025-05-14"))
        .await?;
    let second = service
        .create(params(user.id, room_b.id, "2025-05-10", "2025-05-14"))
        .await?;

    assert_eq!(first.room_id, room_a.id);
    assert_eq!(second.room_id, room_b.id);
    assert_eq!(second.range, first.range);
    assert_eq!(service.list_for_user(user.id).await?.len(), 2);

    Ok(())
}

/// Tests that back-to-back stays sharing a boundary day conflict.
///
/// Expected: Err(Conflict) for a start equal to the previous end
#[tokio::test]
async fn rejects_same_day_turnover() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLocks::new();
    let user = factory::create_user(db).await?;
    let (_, room) = factory::helpers::create_room_with_hotel(db).await?;
    let service = BookingService::new(db, &locks);

    service
        .create(params(user.id, room.id, "2025-05-01", "2025-05-05"))
        .await?;
    let turnover = service
        .create(params(user.id, room.id, "2025-05-05", "2025-05-07"))
        .await;
    let next_day = service
        .create(params(user.id, room.id, "2025-05-06", "2025-05-07"))
        .await;

    assert!(matches!(
        turnover,
        Err(AppError::BookingErr(BookingError::Conflict))
    ));
    assert!(next_day.is_ok());

    Ok(())
}

/// Tests that a single-day booking participates in the overlap check.
///
/// Expected: Err(Conflict) for another stay covering that day
#[tokio::test]
async fn single_day_booking_blocks_its_day() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLocks::new();
    let user = factory::create_user(db).await?;
    let (_, room) = factory::helpers::create_room_with_hotel(db).await?;
    let service = BookingService::new(db, &locks);

    service
        .create(params(user.id, room.id, "2025-06-15", "2025-06-15"))
        .await?;
    let result = service
        .create(params(user.id, room.id, "2025-06-10", "2025-06-15"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::Conflict))
    ));

    Ok(())
}

/// Tests that a cancelled booking frees its dates.
///
/// Expected: Ok for the exact same range after cancellation
#[tokio::test]
async fn cancelled_booking_frees_dates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLocks::new();
    let user = factory::create_user(db).await?;
    let (_, room) = factory::helpers::create_room_with_hotel(db).await?;
    let service = BookingService::new(db, &locks);

    let first = service
        .create(params(user.id, room.id, "2025-05-01", "2025-05-05"))
        .await?;
    service.cancel(first.id, user.id).await?;

    let second = service
        .create(params(user.id, room.id, "2025-05-01", "2025-05-05"))
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests booking a room that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_room() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLocks::new();
    let user = factory::create_user(db).await?;

    let result = BookingService::new(db, &locks)
        .create(params(user.id, 9999, "2025-05-01", "2025-05-02"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Room not found"));

    Ok(())
}

/// Tests that an inverted range is rejected before reaching storage.
///
/// Building the params needs no connection at all.
///
/// Expected: Err(BookingError::InvalidRange)
#[test]
fn rejects_inverted_range_before_storage() {
    let dto = CreateBookingDto {
        room_id: 1,
        start_date: date("2025-08-05"),
        end_date: date("2025-08-01"),
    };

    let result = CreateBookingParams::from_dto(1, dto);

    assert_eq!(
        result.err(),
        Some(BookingError::InvalidRange {
            start: date("2025-08-05"),
            end: date("2025-08-01"),
        })
    );
}
