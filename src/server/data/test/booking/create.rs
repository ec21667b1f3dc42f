use super::*;

/// Tests inserting a booking.
///
/// Expected: Ok(Booking) with status Booked and the requested range
#[tokio::test]
async fn inserts_booked_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, room) = factory::helpers::create_room_with_hotel(db).await?;
    let range = DateRange::new(date("2025-06-01"), date("2025-06-03")).unwrap();

    let booking = BookingRepository::new(db)
        .create(&CreateBookingParams {
            user_id: user.id,
            room_id: room.id,
            range,
        })
        .await?;

    assert_eq!(booking.status, BookingStatus::Booked);
    assert_eq!(booking.range, range);
    assert_eq!(booking.user_id, user.id);

    Ok(())
}
