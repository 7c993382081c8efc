//! Automated message data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryOrder,
};

use crate::server::model::automated_message::AutomatedMessageParams;

pub struct AutomatedMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AutomatedMessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: AutomatedMessageParams,
    ) -> Result<entity::automated_message::Model, DbErr> {
        let now = Utc::now();

        entity::automated_message::ActiveModel {
            message_type: ActiveValue::Set(params.message_type),
            sms_message: ActiveValue::Set(params.sms_message),
            email_message: ActiveValue::Set(params.email_message),
            air_bnb_message: ActiveValue::Set(params.air_bnb_message),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::automated_message::Model>, DbErr> {
        entity::prelude::AutomatedMessage::find()
            .order_by_asc(entity::automated_message::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::automated_message::Model>, DbErr> {
        entity::prelude::AutomatedMessage::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Overwrites the message type and all channel bodies of an existing message.
    pub async fn update(
        &self,
        existing: entity::automated_message::Model,
        params: AutomatedMessageParams,
    ) -> Result<entity::automated_message::Model, DbErr> {
        let mut active_model: entity::automated_message::ActiveModel = existing.into();
        active_model.message_type = ActiveValue::Set(params.message_type);
        active_model.sms_message = ActiveValue::Set(params.sms_message);
        active_model.email_message = ActiveValue::Set(params.email_message);
        active_model.air_bnb_message = ActiveValue::Set(params.air_bnb_message);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    pub async fn delete(&self, existing: entity::automated_message::Model) -> Result<(), DbErr> {
        existing.delete(self.db).await?;

        Ok(())
    }
}
