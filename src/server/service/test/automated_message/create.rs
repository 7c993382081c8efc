use super::*;

/// Tests creating an automated message and reading it back.
///
/// Verifies that every channel text survives the round trip through storage.
///
/// Expected: Ok with the message returned by both get_by_id and get_all
#[tokio::test]
async fn created_message_is_readable() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AutomatedMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AutomatedMessageService::new(db);
    let created = service.create(params("check_in")).await?;

    assert_eq!(created.message_type, "check_in");
    assert_eq!(created.sms_message, "See you soon");
    assert_eq!(created.email_message, "<p>See you soon</p>");
    assert_eq!(created.air_bnb_message, "See you soon!");

    let found = service.get_by_id(created.id).await?;
    assert_eq!(found, Some(created.clone()));

    let all = service.get_all().await?;
    assert_eq!(all, vec![created]);

    Ok(())
}
