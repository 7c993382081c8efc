use super::*;

/// Tests deleting an automated message.
///
/// Expected: Ok with the message gone
#[tokio::test]
async fn deletes_automated_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AutomatedMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_automated_message(db, "check_in").await?;

    let repo = AutomatedMessageRepository::new(db);
    repo.delete(existing.clone()).await?;

    assert!(repo.get_by_id(existing.id).await?.is_none());
    assert_eq!(repo.get_all().await?.len(), 0);

    Ok(())
}
