use super::*;

/// Tests deleting an automated message and reading it back.
///
/// Expected: status true with the success message, then get_by_id returns None
#[tokio::test]
async fn delete_then_get_returns_none() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AutomatedMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_automated_message(db, "check_in").await?;

    let service = AutomatedMessageService::new(db);
    let outcome = service.delete(existing.id).await?;

    assert!(outcome.status);
    assert_eq!(outcome.message, "Automated message deleted successfully.");
    assert!(service.get_by_id(existing.id).await?.is_none());

    Ok(())
}

/// Tests deleting a missing automated message.
///
/// Expected: status false with the not-found message
#[tokio::test]
async fn missing_message_reports_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AutomatedMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let outcome = AutomatedMessageService::new(db).delete(3).await?;

    assert!(!outcome.status);
    assert_eq!(
        outcome.message,
        "Automated message not found or already deleted."
    );

    Ok(())
}
