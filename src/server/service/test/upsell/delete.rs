use super::*;

/// Tests deleting an existing upsell.
///
/// Expected: Ok with status true and the upsell gone
#[tokio::test]
async fn deletes_existing_upsell() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Upsell)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_upsell(db).await?;

    let service = UpsellService::new(db);
    let outcome = service.delete(existing.id).await?;

    assert!(outcome.status);
    assert_eq!(outcome.message, "Upsell deleted successfully.");
    assert!(service.get_by_id(existing.id).await?.is_none());

    Ok(())
}

/// Tests deleting an upsell twice.
///
/// Expected: second call returns status false with the not-found message
#[tokio::test]
async fn second_delete_reports_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Upsell)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_upsell(db).await?;
    let other = factory::create_upsell(db).await?;

    let service = UpsellService::new(db);
    service.delete(existing.id).await?;
    let outcome = service.delete(existing.id).await?;

    assert!(!outcome.status);
    assert_eq!(outcome.message, "Upsell not found or already deleted.");
    assert!(service.get_by_id(other.id).await?.is_some());

    Ok(())
}
