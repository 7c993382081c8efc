use super::*;

/// Tests loading listings together with images and guidebooks.
///
/// Verifies that each listing carries only its own images and that the guidebook is
/// attached where one exists.
///
/// Expected: Ok with two listings and their relations
#[tokio::test]
async fn loads_images_and_guide_books() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _, _) = factory::helpers::create_listing_with_dependencies(db).await?;
    let second = factory::create_listing(db).await?;
    factory::create_guide_book(db, first.listing_id, "Check-in instructions").await?;

    let repo = ListingRepository::new(db);
    let rows = repo.get_all_with_relations().await?;

    assert_eq!(rows.len(), 2);

    let (listing, images, guide_book) = &rows[0];
    assert_eq!(listing.listing_id, first.listing_id);
    assert_eq!(images.len(), 2);
    assert!(images.iter().all(|i| i.listing_id == first.listing_id));
    assert_eq!(
        guide_book.as_ref().map(|g| g.content.as_str()),
        Some("Check-in instructions")
    );

    let (listing, images, guide_book) = &rows[1];
    assert_eq!(listing.listing_id, second.listing_id);
    assert!(images.is_empty());
    assert!(guide_book.is_none());

    Ok(())
}

/// Tests loading listings from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_listings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = ListingRepository::new(db).get_all_with_relations().await?;

    assert!(rows.is_empty());

    Ok(())
}
