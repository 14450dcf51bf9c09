use super::*;

/// Tests that the public listing hides inactive FAQs.
///
/// Expected: only active FAQs in sort order, all FAQs when inactive ones are included
#[tokio::test]
async fn hides_inactive_unless_requested() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Faq)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let second = factory::faq::FaqFactory::new(db).sort_order(2).build().await?;
    let hidden = factory::faq::FaqFactory::new(db)
        .sort_order(1)
        .active(false)
        .build()
        .await?;
    let first = factory::faq::FaqFactory::new(db).sort_order(0).build().await?;

    let repo = FaqRepository::new(db);
    let public: Vec<i32> = repo.get_all(false).await?.into_iter().map(|f| f.id).collect();
    let all: Vec<i32> = repo.get_all(true).await?.into_iter().map(|f| f.id).collect();

    assert_eq!(public, vec![first.id, second.id]);
    assert_eq!(all, vec![first.id, hidden.id, second.id]);

    Ok(())
}
