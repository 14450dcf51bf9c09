use super::*;

/// Tests a partial FAQ update.
///
/// Verifies that provided fields change, others are kept and updated_at moves forward.
///
/// Expected: Ok(Some) with the merged row
#[tokio::test]
async fn merges_fields_and_bumps_updated_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Faq)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let faq = factory::create_faq(db).await?;

    let repo = FaqRepository::new(db);
    let updated = repo
        .update(
            faq.id,
            UpdateFaqParams {
                answer: Some("Until midnight.".to_string()),
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.question, faq.question);
    assert_eq!(updated.answer, "Until midnight.");
    assert!(!updated.is_active);
    assert_eq!(updated.sort_order, faq.sort_order);
    assert!(updated.updated_at >= faq.updated_at);
    assert_eq!(updated.created_at, faq.created_at);

    Ok(())
}

/// Tests updating and deleting a missing FAQ.
///
/// Expected: Ok(None) and Ok(false)
#[tokio::test]
async fn missing_faq_is_reported() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Faq)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FaqRepository::new(db);

    assert!(repo.update(3, UpdateFaqParams::default()).await?.is_none());
    assert!(!repo.delete(3).await?);

    Ok(())
}
