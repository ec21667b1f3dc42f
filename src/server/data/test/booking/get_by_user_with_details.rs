use super::*;

/// Tests the enriched listing and its ordering.
///
/// Verifies that bookings carry room number, hotel name and location and are
/// ordered by start date descending.
///
/// Expected: Ok(Vec) newest stay first
#[tokio::test]
async fn lists_bookings_with_room_and_hotel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let hotel = factory::hotel::HotelFactory::new(db)
        .name("Alpine Lodge")
        .location("Zermatt")
        .build()
        .await?;
    let room = factory::room::RoomFactory::new(db, hotel.id)
        .room_number("12B")
        .build()
        .await?;

    let earlier = factory::booking::BookingFactory::new(db, user.id, room.id)
        .dates("2025-03-01", "2025-03-02")
        .build()
        .await?;
    let later = factory::booking::BookingFactory::new(db, user.id, room.id)
        .dates("2025-09-10", "2025-09-12")
        .cancelled()
        .build()
        .await?;

    let bookings = BookingRepository::new(db)
        .get_by_user_with_details(user.id)
        .await?;

    let ids: Vec<i32> = bookings.iter().map(|b| b.booking.id).collect();
    assert_eq!(ids, vec![later.id, earlier.id]);
    assert_eq!(bookings[0].room_number, "12B");
    assert_eq!(bookings[0].hotel_name, "Alpine Lodge");
    assert_eq!(bookings[0].location, "Zermatt");
    assert_eq!(bookings[0].booking.status, BookingStatus::Cancelled);

    Ok(())
}

/// Tests that ties on start date are broken by id descending.
///
/// Expected: the later-inserted booking first
#[tokio::test]
async fn breaks_start_date_ties_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let hotel = factory::create_hotel(db).await?;
    let a = factory::create_room(db, hotel.id).await?;
    let b = factory::create_room(db, hotel.id).await?;

    let first = factory::create_booking(db, user.id, a.id).await?;
    let second = factory::create_booking(db, user.id, b.id).await?;

    let bookings = BookingRepository::new(db)
        .get_by_user_with_details(user.id)
        .await?;

    let ids: Vec<i32> = bookings.iter().map(|b| b.booking.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests that other users' bookings are not listed.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn excludes_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_booking_with_dependencies(db).await?;
    let loner = factory::create_user(db).await?;

    let bookings = BookingRepository::new(db)
        .get_by_user_with_details(loner.id)
        .await?;

    assert!(bookings.is_empty());

    Ok(())
}
