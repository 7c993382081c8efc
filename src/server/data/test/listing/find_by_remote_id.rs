use super::*;

/// Tests finding a listing by HostAway id.
///
/// Expected: Ok(Some) with the matching listing
#[tokio::test]
async fn finds_listing_by_remote_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let listing = factory::listing::ListingFactory::new(db)
        .id(4242)
        .build()
        .await?;
    factory::create_listing(db).await?;

    let repo = ListingRepository::new(db);
    let result = repo.find_by_remote_id(4242).await?;

    assert!(result.is_some());
    assert_eq!(result.unwrap().listing_id, listing.listing_id);

    Ok(())
}

/// Tests that the lookup does not match on the local key.
///
/// Verifies that passing a listing's `listing_id` does not find it when it differs from
/// the HostAway id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn does_not_match_local_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let listing = factory::listing::ListingFactory::new(db)
        .id(999_999)
        .build()
        .await?;

    let repo = ListingRepository::new(db);
    let result = repo.find_by_remote_id(listing.listing_id as i64).await?;

    assert!(result.is_none());

    Ok(())
}
