use super::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

/// Pool size for the concurrent tests.
///
/// Each request gets its own connection, so only the per-room lock keeps the second
/// transaction from reading before the first one commits.
const POOL_SIZE: u32 = 4;

/// Tests two concurrent overlapping requests for the same room.
///
/// Both requests are polled together on separate connections; the per-room lock must
/// let exactly one of them through and turn the other into a conflict.
///
/// Expected: one Ok, one Err(Conflict), one stored booking
#[tokio::test]
async fn only_one_overlapping_create_succeeds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .with_pool_size(POOL_SIZE)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLocks::new();
    let first_user = factory::create_user(db).await?;
    let second_user = factory::create_user(db).await?;
    let (_, room) = factory::helpers::create_room_with_hotel(db).await?;
    let service = BookingService::new(db, &locks);

    let (first, second) = tokio::join!(
        service.create(params(first_user.id, room.id, "2025-07-01", "2025-07-04")),
        service.create(params(second_user.id, room.id, "2025-07-03", "2025-07-06")),
    );

    let successes = [first.is_ok(), second.is_ok()]
        .iter()
        .filter(|ok| **ok)
        .count();
    assert_eq!(successes, 1);

    let failure = if first.is_err() { first } else { second };
    assert!(matches!(
        failure,
        Err(AppError::BookingErr(BookingError::Conflict))
    ));

    let stored = entity::prelude::Booking::find()
        .filter(entity::booking::Column::RoomId.eq(room.id))
        .count(db)
        .await?;
    assert_eq!(stored, 1);

    Ok(())
}

/// Tests concurrent requests across separate tasks sharing one lock registry.
///
/// Expected: exactly one of several overlapping spawned requests succeeds, every
/// other one is a conflict
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn spawned_overlapping_creates_yield_single_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .with_pool_size(POOL_SIZE)
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();
    let locks = RoomLocks::new();
    let user = factory::create_user(&db).await?;
    let (_, room) = factory::helpers::create_room_with_hotel(&db).await?;

    let mut handles = Vec::new();
    for day in 1..=4 {
        let db = db.clone();
        let locks = locks.clone();
        let request = params(
            user.id,
            room.id,
            &format!("2025-10-0{}", day),
            "2025-10-08",
        );
        handles.push(tokio::spawn(async move {
            BookingService::new(&db, &locks).create(request).await
        }));
    }

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(AppError::BookingErr(BookingError::Conflict)) => {}
            Err(other) => panic!("unexpected error: {}", other),
        }
    }

    assert_eq!(successes, 1);

    let stored = entity::prelude::Booking::find()
        .filter(entity::booking::Column::RoomId.eq(room.id))
        .count(&db)
        .await?;
    assert_eq!(stored, 1);

    Ok(())
}
