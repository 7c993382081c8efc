use super::*;

/// Tests deleting an upsell.
///
/// Expected: Ok with the row removed and others untouched
#[tokio::test]
async fn deletes_upsell() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Upsell)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_upsell(db).await?;
    let other = factory::create_upsell(db).await?;

    let repo = UpsellRepository::new(db);
    repo.delete(target.clone()).await?;

    assert!(repo.get_by_id(target.id).await?.is_none());
    assert!(repo.get_by_id(other.id).await?.is_some());

    Ok(())
}
