use super::*;

/// Tests overwriting the type and channel bodies of a message.
///
/// Expected: Ok with all mutable fields replaced
#[tokio::test]
async fn overwrites_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AutomatedMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_automated_message(db, "check_in").await?;

    let updated = AutomatedMessageRepository::new(db)
        .update(existing.clone(), params("check_out"))
        .await?;

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.message_type, "check_out");
    assert_eq!(updated.email_message, "<p>Your door code is ready</p>");
    assert_eq!(updated.created_at, existing.created_at);

    Ok(())
}
