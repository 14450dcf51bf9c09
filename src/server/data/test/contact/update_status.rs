use super::*;

/// Tests marking a contact message as replied.
///
/// Expected: Ok(Some) with status "replied"
#[tokio::test]
async fn sets_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Contact)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let contact = factory::create_contact(db).await?;

    let repo = ContactRepository::new(db);
    let updated = repo
        .update_status(contact.id, ContactStatus::Replied)
        .await?
        .unwrap();

    assert_eq!(updated.status, "replied");
    assert!(repo.delete(contact.id).await?);
    assert!(repo
        .update_status(contact.id, ContactStatus::Read)
        .await?
        .is_none());

    Ok(())
}
