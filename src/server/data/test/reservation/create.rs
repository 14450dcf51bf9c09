use super::*;

/// Tests that new reservations start out pending.
///
/// Expected: Ok with status "pending" and every field stored
#[tokio::test]
async fn creates_pending_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Reservation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);
    let reservation = repo
        .create(CreateReservationParams {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            date: "2026-12-31".to_string(),
            guests: "4".to_string(),
            requirements: "Window seat".to_string(),
        })
        .await?;

    assert_eq!(reservation.status, "pending");
    assert_eq!(reservation.name, "Ada");
    assert_eq!(reservation.guests, "4");
    assert_eq!(reservation.requirements, "Window seat");

    Ok(())
}
