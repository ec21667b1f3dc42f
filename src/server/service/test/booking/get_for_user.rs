use super::*;

/// Tests that only the owner can view a booking.
///
/// Expected: Ok for the owner, Err(BookingError::NotFound) for another user
#[tokio::test]
async fn hides_other_users_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLocks::new();
    let (owner, _, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    let stranger = factory::create_user(db).await?;
    let service = BookingService::new(db, &locks);

    let own = service.get_for_user(booking.id, owner.id).await?;
    let foreign = service.get_for_user(booking.id, stranger.id).await;

    assert_eq!(own.booking.id, booking.id);
    assert!(matches!(
        foreign,
        Err(AppError::BookingErr(BookingError::NotFound))
    ));

    Ok(())
}
