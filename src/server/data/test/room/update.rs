use super::*;

/// Tests moving a room to another hotel and changing its price.
///
/// Expected: Ok(Some) with updated fields
#[tokio::test]
async fn updates_existing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_hotel(db).await?;
    let other_hotel = factory::create_hotel(db).await?;

    let updated = RoomRepository::new(db)
        .update(UpdateRoomParams {
            id: room.id,
            hotel_id: other_hotel.id,
            room_number: room.room_number.clone(),
            price: 140.0,
            capacity: room.capacity,
        })
        .await?
        .unwrap();

    assert_eq!(updated.hotel_id, other_hotel.id);
    assert_eq!(updated.price, 140.0);

    Ok(())
}

/// Tests deleting a room that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn delete_missing_room_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!RoomRepository::new(db).delete(42).await?);

    Ok(())
}
