use super::*;

/// Tests creating an upsell and reading it back.
///
/// Expected: Ok with the upsell returned by both get_by_id and get_all
#[tokio::test]
async fn created_upsell_is_readable() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Upsell)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UpsellService::new(db);
    let created = service.create(params("Late checkout")).await?;

    let found = service.get_by_id(created.id).await?;
    assert_eq!(found, Some(created.clone()));

    let all = service.get_all().await?;
    assert_eq!(all, vec![created]);

    Ok(())
}
