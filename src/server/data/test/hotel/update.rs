use super::*;

/// Tests replacing a hotel's fields.
///
/// Expected: Ok(Some) with the new values
#[tokio::test]
async fn updates_existing_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::create_hotel(db).await?;

    let updated = HotelRepository::new(db)
        .update(UpdateHotelParams {
            id: hotel.id,
            name: "Renamed".to_string(),
            location: "Oslo".to_string(),
            description: String::new(),
            base_price: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.location, "Oslo");
    assert_eq!(updated.base_price, None);

    Ok(())
}

/// Tests updating a hotel that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = HotelRepository::new(db)
        .update(UpdateHotelParams {
            id: 999,
            name: "Ghost".to_string(),
            location: "Nowhere".to_string(),
            description: String::new(),
            base_price: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
