use super::*;

/// Tests creating an automated message.
///
/// Expected: Ok with every channel body stored
#[tokio::test]
async fn creates_automated_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AutomatedMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let message = AutomatedMessageRepository::new(db)
        .create(params("check_in"))
        .await?;

    assert_eq!(message.message_type, "check_in");
    assert_eq!(message.sms_message, "Your door code is ready");
    assert_eq!(message.air_bnb_message, "Door code inside the app");

    let count = entity::prelude::AutomatedMessage::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
