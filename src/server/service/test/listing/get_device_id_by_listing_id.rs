use super::*;

/// Tests resolving the device id through the HostAway id.
///
/// The lock row is keyed by the listing's local key while the lookup uses the HostAway
/// id, so both keys take part in the resolution.
///
/// Expected: Ok(Some) with the active lock id
#[tokio::test]
async fn resolves_active_lock_through_remote_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let listing = factory::listing::ListingFactory::new(db)
        .id(555_001)
        .build()
        .await?;
    factory::listing_lock_info::LockInfoFactory::new(db, listing.listing_id)
        .lock_id("old-lock")
        .status(0)
        .build()
        .await?;
    factory::listing_lock_info::LockInfoFactory::new(db, listing.listing_id)
        .lock_id("L1")
        .build()
        .await?;

    let device_id = ListingService::new(db)
        .get_device_id_by_listing_id(555_001)
        .await?;

    assert_eq!(device_id, Some("L1".to_string()));

    Ok(())
}

/// Tests a listing whose mappings are all inactive.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_active_lock() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let listing = factory::listing::ListingFactory::new(db)
        .id(555_002)
        .build()
        .await?;
    factory::listing_lock_info::LockInfoFactory::new(db, listing.listing_id)
        .lock_id("L1")
        .status(0)
        .build()
        .await?;

    let device_id = ListingService::new(db)
        .get_device_id_by_listing_id(555_002)
        .await?;

    assert!(device_id.is_none());

    Ok(())
}

/// Tests an unknown HostAway id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_listing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let device_id = ListingService::new(db)
        .get_device_id_by_listing_id(1)
        .await?;

    assert!(device_id.is_none());

    Ok(())
}
