use super::*;

/// Tests updating an existing automated message.
///
/// Expected: Ok(Updated) with the new type and bodies
#[tokio::test]
async fn updates_existing_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AutomatedMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_automated_message(db, "check_in").await?;

    let outcome = AutomatedMessageService::new(db)
        .update(existing.id, params("pre_arrival"))
        .await?;

    let UpdateOutcome::Updated(message) = outcome else {
        panic!("expected automated message to be updated");
    };
    assert_eq!(message.id, existing.id);
    assert_eq!(message.message_type, "pre_arrival");
    assert_eq!(message.sms_message, "See you soon");

    Ok(())
}

/// Tests updating a missing automated message.
///
/// Expected: Ok(NotFound) with "Automated message not found!" and no row created
#[tokio::test]
async fn missing_message_returns_not_found_without_write() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AutomatedMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let outcome = AutomatedMessageService::new(db)
        .update(12, params("check_out"))
        .await?;

    assert_eq!(
        outcome,
        UpdateOutcome::NotFound {
            message: "Automated message not found!"
        }
    );
    assert_eq!(entity::prelude::AutomatedMessage::find().count(db).await?, 0);

    Ok(())
}

/// Tests the soft-failure response body.
///
/// Expected: `{ "status": false, "message": "Automated message not found!" }`
#[tokio::test]
async fn not_found_outcome_serializes_status_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AutomatedMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let outcome = AutomatedMessageService::new(db)
        .update(12, params("check_out"))
        .await?;
    let json = serde_json::to_value(outcome.into_dto(|m| m.into_dto())).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "status": false, "message": "Automated message not found!" })
    );

    Ok(())
}
