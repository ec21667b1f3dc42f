use super::*;

/// Tests cancelling twice.
///
/// Expected: both calls succeed and the booking stays Cancelled
#[tokio::test]
async fn cancel_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLocks::new();
    let (owner, _, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    let service = BookingService::new(db, &locks);

    let first = service.cancel(booking.id, owner.id).await?;
    let second = service.cancel(booking.id, owner.id).await?;

    assert_eq!(first.status, BookingStatus::Cancelled);
    assert_eq!(second.status, BookingStatus::Cancelled);

    Ok(())
}

/// Tests that a non-owner cannot cancel and the booking is unchanged.
///
/// Expected: Err(BookingError::NotFound), booking still Booked
#[tokio::test]
async fn non_owner_cannot_cancel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLocks::new();
    let (owner, _, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    let stranger = factory::create_user(db).await?;
    let service = BookingService::new(db, &locks);

    let result = service.cancel(booking.id, stranger.id).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::NotFound))
    ));
    let stored = service.get_for_user(booking.id, owner.id).await?;
    assert_eq!(stored.booking.status, BookingStatus::Booked);

    Ok(())
}

/// Expected: Err(BookingError::NotFound) for an unknown id
#[tokio::test]
async fn unknown_booking_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLocks::new();
    let user = factory::create_user(db).await?;

    let result = BookingService::new(db, &locks).cancel(12345, user.id).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::NotFound))
    ));

    Ok(())
}
