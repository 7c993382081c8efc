//! Automated guest message domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::automated_message::{AutomatedMessageDto, AutomatedMessageRequestDto};

/// Message template sent to guests on a trigger such as check-in, per channel.
#[derive(Debug, Clone, PartialEq)]
pub struct AutomatedMessage {
    pub id: i32,
    pub message_type: String,
    pub sms_message: String,
    pub email_message: String,
    pub air_bnb_message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AutomatedMessage {
    pub fn from_entity(entity: entity::automated_message::Model) -> Self {
        Self {
            id: entity.id,
            message_type: entity.message_type,
            sms_message: entity.sms_message,
            email_message: entity.email_message,
            air_bnb_message: entity.air_bnb_message,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> AutomatedMessageDto {
        AutomatedMessageDto {
            id: self.id,
            message_type: self.message_type,
            sms_message: self.sms_message,
            email_message: self.email_message,
            air_bnb_message: self.air_bnb_message,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Mutable automated message fields, used for both create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutomatedMessageParams {
    pub message_type: String,
    pub sms_message: String,
    pub email_message: String,
    pub air_bnb_message: String,
}

impl From<AutomatedMessageRequestDto> for AutomatedMessageParams {
    fn from(dto: AutomatedMessageRequestDto) -> Self {
        Self {
            message_type: dto.message_type,
            sms_message: dto.sms_message,
            email_message: dto.email_message,
            air_bnb_message: dto.air_bnb_message,
        }
    }
}
