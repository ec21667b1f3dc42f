use super::*;

/// Tests listing without filters.
///
/// Expected: every hotel, ordered by id
#[tokio::test]
async fn returns_all_hotels_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_hotel(db).await?;
    let second = factory::hotel::HotelFactory::new(db)
        .base_price(None)
        .build()
        .await?;

    let hotels = HotelRepository::new(db)
        .get_all(&HotelFilter::default())
        .await?;

    let ids: Vec<i32> = hotels.iter().map(|h| h.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests the location substring filter.
///
/// Expected: only hotels whose location contains the term
#[tokio::test]
async fn filters_by_location_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let paris = factory::hotel::HotelFactory::new(db)
        .location("Paris, France")
        .build()
        .await?;
    factory::hotel::HotelFactory::new(db)
        .location("Berlin, Germany")
        .build()
        .await?;

    let hotels = HotelRepository::new(db)
        .get_all(&HotelFilter {
            location: Some("Paris".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0].id, paris.id);

    Ok(())
}

/// Tests that price bounds are inclusive and exclude hotels without a base price.
///
/// Expected: hotels priced exactly at either bound are kept
#[tokio::test]
async fn filters_by_inclusive_price_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let low = factory::hotel::HotelFactory::new(db)
        .base_price(Some(50.0))
        .build()
        .await?;
    let high = factory::hotel::HotelFactory::new(db)
        .base_price(Some(150.0))
        .build()
        .await?;
    factory::hotel::HotelFactory::new(db)
        .base_price(Some(151.0))
        .build()
        .await?;
    factory::hotel::HotelFactory::new(db)
        .base_price(None)
        .build()
        .await?;

    let hotels = HotelRepository::new(db)
        .get_all(&HotelFilter {
            location: None,
            min_price: Some(50.0),
            max_price: Some(150.0),
        })
        .await?;

    let ids: Vec<i32> = hotels.iter().map(|h| h.id).collect();
    assert_eq!(ids, vec![low.id, high.id]);

    Ok(())
}
