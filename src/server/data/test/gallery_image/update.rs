use super::*;

/// Tests a partial gallery image update.
///
/// Expected: only the provided fields change
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GalleryImage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let image = factory::gallery_image::GalleryImageFactory::new(db)
        .title("Bar")
        .sort_order(3)
        .build()
        .await?;

    let repo = GalleryImageRepository::new(db);
    let updated = repo
        .update(
            image.id,
            UpdateGalleryImageParams {
                alt: Some("Cocktails".to_string()),
                title: None,
                sort_order: Some(1),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.alt, "Cocktails");
    assert_eq!(updated.title, "Bar");
    assert_eq!(updated.sort_order, 1);
    assert_eq!(updated.url, image.url);

    Ok(())
}
