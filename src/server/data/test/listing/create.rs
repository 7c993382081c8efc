use super::*;

/// Tests inserting a listing.
///
/// Verifies that the repository assigns a local key and stores the HostAway id and
/// defaulted fields as given.
///
/// Expected: Ok with listing created
#[tokio::test]
async fn creates_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ListingRepository::new(db);
    let listing = repo.create(new_listing(42)).await?;

    assert!(listing.listing_id > 0);
    assert_eq!(listing.id, 42);
    assert_eq!(listing.name, "");
    assert_eq!(listing.wifi_username, "(NO WIFI)");
    assert_eq!(listing.wifi_password, "(NO PASSWORD)");

    let count = entity::prelude::Listing::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests inserting two listings with the same HostAway id.
///
/// Verifies that the unique constraint on `id` rejects the duplicate.
///
/// Expected: Err on second insert
#[tokio::test]
async fn rejects_duplicate_remote_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ListingRepository::new(db);
    repo.create(new_listing(7)).await?;
    let result = repo.create(new_listing(7)).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that a listing created inside a transaction disappears on rollback.
///
/// Expected: Ok with no listing stored after rollback
#[tokio::test]
async fn create_inside_rolled_back_transaction_is_discarded() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let txn = db.begin().await?;
    ListingRepository::new(&txn).create(new_listing(9)).await?;
    txn.rollback().await?;

    let count = entity::prelude::Listing::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
