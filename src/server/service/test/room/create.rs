use super::*;

/// Tests that a room needs an existing hotel.
///
/// Expected: Err(AppError::NotFound("Hotel not found"))
#[tokio::test]
async fn requires_existing_hotel() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RoomService::new(db)
        .create(CreateRoomParams {
            hotel_id: 31,
            room_number: "101".to_string(),
            price: 50.0,
            capacity: 2,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Hotel not found"));

    Ok(())
}

/// Tests room validation.
///
/// Expected: Err(AppError::BadRequest) for zero capacity and negative price
#[tokio::test]
async fn rejects_invalid_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let hotel = factory::create_hotel(db).await?;
    let service = RoomService::new(db);

    let no_capacity = service
        .create(CreateRoomParams {
            hotel_id: hotel.id,
            room_number: "101".to_string(),
            price: 50.0,
            capacity: 0,
        })
        .await;
    let negative_price = service
        .create(CreateRoomParams {
            hotel_id: hotel.id,
            room_number: "102".to_string(),
            price: -5.0,
            capacity: 1,
        })
        .await;

    assert!(matches!(no_capacity, Err(AppError::BadRequest(_))));
    assert!(matches!(negative_price, Err(AppError::BadRequest(_))));
    assert!(service.get_all().await?.is_empty());

    Ok(())
}
