use super::*;

/// Tests updating an existing upsell.
///
/// Expected: Ok(Updated) with the new field values
#[tokio::test]
async fn updates_existing_upsell() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Upsell)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_upsell(db).await?;

    let outcome = UpsellService::new(db)
        .update(existing.id, params("Pet fee"))
        .await?;

    match outcome {
        UpdateOutcome::Updated(upsell) => {
            assert_eq!(upsell.id, existing.id);
            assert_eq!(upsell.title, "Pet fee");
            assert_eq!(upsell.availability, "on request");
        }
        UpdateOutcome::NotFound { .. } => panic!("expected upsell to be updated"),
    }

    Ok(())
}

/// Tests updating a missing upsell.
///
/// Verifies that the soft-failure message is returned and no row is created.
///
/// Expected: Ok(NotFound) with "Upsell not found!"
#[tokio::test]
async fn missing_upsell_returns_not_found_without_write() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Upsell)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let outcome = UpsellService::new(db).update(99, params("Ghost")).await?;

    assert_eq!(
        outcome,
        UpdateOutcome::NotFound {
            message: "Upsell not found!"
        }
    );
    assert_eq!(entity::prelude::Upsell::find().count(db).await?, 0);

    Ok(())
}
