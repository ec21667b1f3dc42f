use super::*;

/// Tests filtering rooms by the owning hotel's location.
///
/// Expected: only rooms in hotels whose location contains the term
#[tokio::test]
async fn filters_by_hotel_location() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rome = factory::hotel::HotelFactory::new(db)
        .location("Rome, Italy")
        .build()
        .await?;
    let madrid = factory::hotel::HotelFactory::new(db)
        .location("Madrid, Spain")
        .build()
        .await?;
    let rome_room = factory::create_room(db, rome.id).await?;
    factory::create_room(db, madrid.id).await?;

    let rooms = RoomRepository::new(db)
        .search(&RoomSearch {
            location: Some("Rome".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, rome_room.id);

    Ok(())
}

/// Tests inclusive room price bounds.
///
/// Expected: rooms priced exactly at either bound are kept
#[tokio::test]
async fn filters_by_inclusive_room_price() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::create_hotel(db).await?;
    let cheap = factory::room::RoomFactory::new(db, hotel.id)
        .price(80.0)
        .build()
        .await?;
    let pricey = factory::room::RoomFactory::new(db, hotel.id)
        .price(200.0)
        .build()
        .await?;
    factory::room::RoomFactory::new(db, hotel.id)
        .price(200.01)
        .build()
        .await?;

    let rooms = RoomRepository::new(db)
        .search(&RoomSearch {
            location: None,
            min_price: Some(80.0),
            max_price: Some(200.0),
        })
        .await?;

    let ids: Vec<i32> = rooms.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![cheap.id, pricey.id]);

    Ok(())
}
