use super::*;

/// Tests creating an upsell.
///
/// Verifies that all request fields are persisted and both timestamps are set.
///
/// Expected: Ok with upsell created
#[tokio::test]
async fn creates_upsell() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Upsell)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UpsellRepository::new(db);
    let upsell = repo.create(params("Early check-in")).await?;

    assert_eq!(upsell.title, "Early check-in");
    assert_eq!(upsell.price, 40.0);
    assert_eq!(upsell.availability, "weekdays");
    assert_eq!(upsell.created_at, upsell.updated_at);

    let stored = entity::prelude::Upsell::find_by_id(upsell.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}
