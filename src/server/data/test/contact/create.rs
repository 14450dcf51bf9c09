use super::*;

/// Tests that new contact messages start out as `new`.
///
/// Expected: Ok with status "new"
#[tokio::test]
async fn creates_new_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Contact)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContactRepository::new(db);
    let contact = repo
        .create(CreateContactParams {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            phone: String::new(),
            subject: "Private dining".to_string(),
            message: "Do you host parties of 20?".to_string(),
        })
        .await?;

    assert_eq!(contact.status, "new");
    assert_eq!(contact.subject, "Private dining");
    assert_eq!(repo.get_by_id(contact.id).await?.map(|c| c.id), Some(contact.id));

    Ok(())
}
