use super::*;

/// Tests pagination metadata and newest-first ordering.
///
/// Verifies that 1-based pages slice a newest-first list and the total counts
/// every row.
///
/// Expected: Ok with page 2 holding the oldest row
#[tokio::test]
async fn pages_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let oldest = factory::reservation::ReservationFactory::new(db)
        .created_at(now - Duration::hours(3))
        .build()
        .await?;
    let middle = factory::reservation::ReservationFactory::new(db)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newest = factory::reservation::ReservationFactory::new(db)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let (first, total) = repo
        .get_paginated(ReservationFilter::default(), 1, 2)
        .await?;
    let (second, _) = repo
        .get_paginated(ReservationFilter::default(), 2, 2)
        .await?;

    assert_eq!(total, 3);
    assert_eq!(
        first.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![newest.id, middle.id]
    );
    assert_eq!(
        second.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![oldest.id]
    );

    Ok(())
}

/// Tests filtering by status and date together.
///
/// Expected: Ok with only the row matching both filters
#[tokio::test]
async fn filters_by_status_and_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::reservation::ReservationFactory::new(db)
        .status("confirmed")
        .date("2026-12-24")
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db)
        .status("confirmed")
        .date("2026-12-25")
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db)
        .status("pending")
        .date("2026-12-24")
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let (rows, total) = repo
        .get_paginated(
            ReservationFilter {
                status: Some(ReservationStatus::Confirmed),
                date: Some("2026-12-24".to_string()),
            },
            1,
            20,
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(rows[0].id, target.id);

    Ok(())
}
