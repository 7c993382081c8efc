use super::*;

/// Tests resolving the active lock mapping among historical rows.
///
/// Verifies that rows with a status other than 1 are ignored.
///
/// Expected: Ok(Some) with the active mapping
#[tokio::test]
async fn returns_only_active_mapping() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let listing = factory::create_listing(db).await?;
    factory::listing_lock_info::LockInfoFactory::new(db, listing.listing_id)
        .lock_id("retired-lock")
        .status(0)
        .build()
        .await?;
    factory::listing_lock_info::LockInfoFactory::new(db, listing.listing_id)
        .lock_id("front-door")
        .build()
        .await?;

    let repo = ListingLockRepository::new(db);
    let result = repo.find_active_by_listing_id(listing.listing_id).await?;

    assert_eq!(result.map(|l| l.lock_id), Some("front-door".to_string()));

    Ok(())
}

/// Tests a listing whose only mappings are inactive.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_no_active_mapping() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let listing = factory::create_listing(db).await?;
    factory::listing_lock_info::LockInfoFactory::new(db, listing.listing_id)
        .status(2)
        .build()
        .await?;

    let result = ListingLockRepository::new(db)
        .find_active_by_listing_id(listing.listing_id)
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that mappings of other listings are not returned.
///
/// Expected: Ok(None) for the listing without mappings
#[tokio::test]
async fn ignores_other_listings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (other, _, _) = factory::helpers::create_listing_with_dependencies(db).await?;
    let listing = factory::create_listing(db).await?;
    assert_ne!(other.listing_id, listing.listing_id);

    let result = ListingLockRepository::new(db)
        .find_active_by_listing_id(listing.listing_id)
        .await?;

    assert!(result.is_none());

    Ok(())
}
