use super::*;

/// Tests fetching a listing by its local key.
///
/// Expected: Ok(Some) with images
#[tokio::test]
async fn returns_listing_by_local_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (listing, _, _) = factory::helpers::create_listing_with_dependencies(db).await?;

    let result = ListingService::new(db)
        .get_listing_by_id(listing.listing_id)
        .await?;

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.listing_id, listing.listing_id);
    assert_eq!(found.id, listing.id);
    assert_eq!(found.images.len(), 2);
    assert!(found.guide_book.is_none());

    Ok(())
}

/// Tests fetching a listing that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ListingService::new(db).get_listing_by_id(31337).await?;

    assert!(result.is_none());

    Ok(())
}
