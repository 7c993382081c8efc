use super::*;

/// Tests fetching a listing by local key with its images ordered by sort order.
///
/// Expected: Ok(Some) with images sorted ascending
#[tokio::test]
async fn returns_listing_with_sorted_images() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let listing = factory::create_listing(db).await?;
    factory::listing_image::ListingImageFactory::new(db, listing.listing_id)
        .sort_order(2)
        .build()
        .await?;
    factory::listing_image::ListingImageFactory::new(db, listing.listing_id)
        .sort_order(0)
        .build()
        .await?;

    let repo = ListingRepository::new(db);
    let result = repo.get_by_listing_id_with_images(listing.listing_id).await?;

    assert!(result.is_some());
    let (found, images) = result.unwrap();
    assert_eq!(found.id, listing.id);
    assert_eq!(images.len(), 2);
    assert_eq!(images[0].sort_order, 0);
    assert_eq!(images[1].sort_order, 2);

    Ok(())
}

/// Tests fetching a non-existent listing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_listing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ListingRepository::new(db)
        .get_by_listing_id_with_images(12345)
        .await?;

    assert!(result.is_none());

    Ok(())
}
