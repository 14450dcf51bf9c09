use super::*;

/// Tests sort order assignment on an empty gallery.
///
/// Expected: first image gets sort_order 1
#[tokio::test]
async fn first_image_gets_sort_order_one() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GalleryImage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GalleryImageRepository::new(db);
    let image = repo.create(params("https://img.example/a.jpg")).await?;

    assert_eq!(image.sort_order, 1);
    assert_eq!(image.alt, "Plated dish");
    assert!(image.filename.is_none());

    Ok(())
}

/// Tests that new images are appended after the highest sort order.
///
/// Expected: sort_order = max + 1 and listing in display order
#[tokio::test]
async fn appends_after_highest_sort_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GalleryImage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let late = factory::gallery_image::GalleryImageFactory::new(db)
        .sort_order(7)
        .build()
        .await?;
    let early = factory::gallery_image::GalleryImageFactory::new(db)
        .sort_order(2)
        .build()
        .await?;

    let repo = GalleryImageRepository::new(db);
    let image = repo.create(params("https://img.example/b.jpg")).await?;

    assert_eq!(image.sort_order, 8);
    let ids: Vec<i32> = repo.get_all().await?.into_iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![early.id, late.id, image.id]);

    Ok(())
}

/// Tests appending when the highest sort order is already `i32::MAX`.
///
/// Expected: no overflow; the new image takes `i32::MAX`
#[tokio::test]
async fn sort_order_saturates_at_max() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GalleryImage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::gallery_image::GalleryImageFactory::new(db)
        .sort_order(i32::MAX)
        .build()
        .await?;

    let repo = GalleryImageRepository::new(db);
    let image = repo.create(params("https://img.example/c.jpg")).await?;

    assert_eq!(image.sort_order, i32::MAX);

    Ok(())
}
