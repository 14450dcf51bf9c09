use super::*;

/// Tests that new FAQs are appended after the highest sort order.
///
/// Expected: sort_order = max + 1
#[tokio::test]
async fn appends_after_highest_sort_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Faq)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::faq::FaqFactory::new(db).sort_order(4).build().await?;

    let repo = FaqRepository::new(db);
    let faq = repo
        .create(CreateFaqParams {
            question: "Do you take walk-ins?".to_string(),
            answer: "Yes, subject to availability.".to_string(),
            is_active: true,
        })
        .await?;

    assert_eq!(faq.sort_order, 5);
    assert!(faq.is_active);
    assert_eq!(faq.created_at, faq.updated_at);

    Ok(())
}

/// Tests appending when the highest sort order is already `i32::MAX`.
///
/// Expected: no overflow; the new FAQ takes `i32::MAX`
#[tokio::test]
async fn sort_order_saturates_at_max() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Faq)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::faq::FaqFactory::new(db)
        .sort_order(i32::MAX)
        .build()
        .await?;

    let repo = FaqRepository::new(db);
    let faq = repo
        .create(CreateFaqParams {
            question: "Is there parking?".to_string(),
            answer: "On the street.".to_string(),
            is_active: true,
        })
        .await?;

    assert_eq!(faq.sort_order, i32::MAX);

    Ok(())
}
