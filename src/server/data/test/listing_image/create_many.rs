use super::*;

fn image(url: &str, sort_order: i32) -> NewListingImage {
    NewListingImage {
        caption: Some(format!("Caption {}", sort_order)),
        vrbo_caption: None,
        airbnb_caption: None,
        url: url.to_string(),
        sort_order,
    }
}

/// Tests inserting several images for a listing.
///
/// Verifies that every image is tagged with the given listing key.
///
/// Expected: Ok(2) with two rows stored
#[tokio::test]
async fn inserts_all_images_for_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let listing = factory::create_listing(db).await?;

    let repo = ListingImageRepository::new(db);
    let inserted = repo
        .create_many(
            listing.listing_id,
            vec![image("https://a.test/0.jpg", 0), image("https://a.test/1.jpg", 1)],
        )
        .await?;

    assert_eq!(inserted, 2);

    let stored = entity::prelude::ListingImage::find()
        .filter(entity::listing_image::Column::ListingId.eq(listing.listing_id))
        .order_by_asc(entity::listing_image::Column::SortOrder)
        .all(db)
        .await?;
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].url, "https://a.test/0.jpg");
    assert_eq!(stored[1].caption, Some("Caption 1".to_string()));
    assert_eq!(stored[1].vrbo_caption, None);

    Ok(())
}

/// Tests inserting an empty image list.
///
/// Expected: Ok(0) with no rows stored
#[tokio::test]
async fn empty_list_inserts_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let listing = factory::create_listing(db).await?;

    let inserted = ListingImageRepository::new(db)
        .create_many(listing.listing_id, Vec::new())
        .await?;

    assert_eq!(inserted, 0);
    assert!(entity::prelude::ListingImage::find().all(db).await?.is_empty());

    Ok(())
}
