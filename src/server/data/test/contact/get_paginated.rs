use super::*;

/// Tests the status filter and newest-first ordering of contact messages.
///
/// Expected: Ok with only unread messages, newest first
#[tokio::test]
async fn filters_by_status_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Contact)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = factory::contact::ContactFactory::new(db)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let newer = factory::contact::ContactFactory::new(db)
        .created_at(now - Duration::days(1))
        .build()
        .await?;
    factory::contact::ContactFactory::new(db)
        .status("replied")
        .build()
        .await?;

    let repo = ContactRepository::new(db);
    let (rows, total) = repo
        .get_paginated(Some(ContactStatus::New), 1, 20)
        .await?;
    let (_, all) = repo.get_paginated(None, 1, 20).await?;

    assert_eq!(total, 2);
    assert_eq!(all, 3);
    assert_eq!(
        rows.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![newer.id, older.id]
    );

    Ok(())
}
