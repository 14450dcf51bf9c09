use super::*;

/// Tests that upserting overwrites existing keys and inserts new ones.
///
/// Expected: Ok with the existing key changed, the new key added and the
/// untouched key kept
#[tokio::test]
async fn inserts_and_overwrites_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Setting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_setting(db, "phone", "+33 1").await?;
    factory::create_setting(db, "email", "old@example.com").await?;

    let repo = SettingRepository::new(db);
    repo.upsert_many(vec![
        ("email".to_string(), "new@example.com".to_string()),
        ("hours_sun".to_string(), "Closed".to_string()),
    ])
    .await?;

    let settings: Vec<(String, String)> = repo
        .get_all()
        .await?
        .into_iter()
        .map(|s| (s.key, s.value))
        .collect();

    assert_eq!(
        settings,
        vec![
            ("email".to_string(), "new@example.com".to_string()),
            ("hours_sun".to_string(), "Closed".to_string()),
            ("phone".to_string(), "+33 1".to_string()),
        ]
    );
    assert_eq!(repo.count().await?, 3);

    Ok(())
}
