use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for both creating and updating an automated message.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AutomatedMessageRequestDto {
    pub message_type: String,
    #[serde(default)]
    pub sms_message: String,
    #[serde(default)]
    pub email_message: String,
    #[serde(default)]
    pub air_bnb_message: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AutomatedMessageDto {
    pub id: i32,
    pub message_type: String,
    pub sms_message: String,
    pub email_message: String,
    pub air_bnb_message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
