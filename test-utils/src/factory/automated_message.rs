//! Automated message factory for creating test guest message templates.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an automated message of the given type with placeholder bodies.
///
/// # Arguments
/// - `db` - Database connection
/// - `message_type` - Message type, e.g. `"check_in"`
///
/// # Returns
/// - `Ok(Model)` - Created automated message entity
/// - `Err(DbErr)` - Database error during insertion
pub async fn create_automated_message(
    db: &DatabaseConnection,
    message_type: &str,
) -> Result<entity::automated_message::Model, DbErr> {
    let now = Utc::now();
    entity::automated_message::ActiveModel {
        message_type: ActiveValue::Set(message_type.to_string()),
        sms_message: ActiveValue::Set(format!("SMS {}", message_type)),
        email_message: ActiveValue::Set(format!("Email {}", message_type)),
        air_bnb_message: ActiveValue::Set(format!("Airbnb {}", message_type)),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
