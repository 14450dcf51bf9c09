use super::*;

/// Tests changing a reservation's status.
///
/// Expected: Ok(Some) with the new status stored
#[tokio::test]
async fn sets_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reservation = factory::create_reservation(db).await?;

    let repo = ReservationRepository::new(db);
    let updated = repo
        .update_status(reservation.id, ReservationStatus::Cancelled)
        .await?
        .unwrap();

    assert_eq!(updated.status, "cancelled");
    assert_eq!(
        repo.get_by_id(reservation.id).await?.unwrap().status,
        "cancelled"
    );

    Ok(())
}

/// Tests changing the status of a missing reservation.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);

    assert!(repo
        .update_status(5, ReservationStatus::Confirmed)
        .await?
        .is_none());

    Ok(())
}
