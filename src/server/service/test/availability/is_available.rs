use super::*;

/// Tests a room without bookings.
///
/// Expected: Ok(true)
#[tokio::test]
async fn empty_room_is_available() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, room) = factory::helpers::create_room_with_hotel(db).await?;

    let available = AvailabilityService::new(db)
        .is_available(room.id, &range("2025-05-01", "2025-05-05"))
        .await?;

    assert!(available);

    Ok(())
}

/// Tests the inclusive boundary: a stay starting on another's last day conflicts.
///
/// Expected: Ok(false) for touching ranges, Ok(true) for the next day
#[tokio::test]
async fn touching_boundary_is_unavailable() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, room, _) = factory::helpers::create_booking_with_dependencies(db).await?;
    let service = AvailabilityService::new(db);

    // existing booking covers 2025-05-01..=2025-05-05
    assert!(!service
        .is_available(room.id, &range("2025-05-05", "2025-05-08"))
        .await?);
    assert!(!service
        .is_available(room.id, &range("2025-04-28", "2025-05-01"))
        .await?);
    assert!(service
        .is_available(room.id, &range("2025-05-06", "2025-05-08"))
        .await?);

    Ok(())
}

/// Tests that cancelled bookings never block.
///
/// Expected: Ok(true)
#[tokio::test]
async fn cancelled_booking_does_not_block() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let (_, room) = factory::helpers::create_room_with_hotel(db).await?;
    factory::booking::BookingFactory::new(db, user.id, room.id)
        .cancelled()
        .build()
        .await?;

    let available = AvailabilityService::new(db)
        .is_available(room.id, &range("2025-05-02", "2025-05-03"))
        .await?;

    assert!(available);

    Ok(())
}
