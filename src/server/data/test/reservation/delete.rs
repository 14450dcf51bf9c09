use super::*;

/// Tests deleting a reservation.
///
/// Expected: true once, then false
#[tokio::test]
async fn deletes_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reservation = factory::create_reservation(db).await?;

    let repo = ReservationRepository::new(db);

    assert!(repo.delete(reservation.id).await?);
    assert!(!repo.delete(reservation.id).await?);

    Ok(())
}
