use super::*;

/// Tests overwriting every mutable field of an upsell.
///
/// Expected: Ok with all fields replaced and the id kept
#[tokio::test]
async fn overwrites_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Upsell)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_upsell(db).await?;
    let created_at = existing.created_at;

    let repo = UpsellRepository::new(db);
    let mut new_params = params("Airport pickup");
    new_params.price = 65.5;
    new_params.status = 0;
    let updated = repo.update(existing.clone(), new_params).await?;

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.title, "Airport pickup");
    assert_eq!(updated.price, 65.5);
    assert_eq!(updated.status, 0);
    assert_eq!(updated.created_at, created_at);
    assert!(updated.updated_at >= created_at);

    let stored = entity::prelude::Upsell::find_by_id(existing.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.title, "Airport pickup");

    Ok(())
}
