use sea_orm::DatabaseConnection;

use crate::server::{
    data::automated_message::AutomatedMessageRepository,
    error::AppError,
    model::{
        automated_message::{AutomatedMessage, AutomatedMessageParams},
        outcome::{DeleteOutcome, UpdateOutcome},
    },
};

const NOT_FOUND: &str = "Automated message not found!";
const NOT_FOUND_OR_DELETED: &str = "Automated message not found or already deleted.";
const DELETED: &str = "Automated message deleted successfully.";

pub struct AutomatedMessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AutomatedMessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: AutomatedMessageParams) -> Result<AutomatedMessage, AppError> {
        tracing::debug!("Creating automated message of type {}", params.message_type);

        let message = AutomatedMessageRepository::new(self.db).create(params).await?;

        Ok(AutomatedMessage::from_entity(message))
    }

    pub async fn get_all(&self) -> Result<Vec<AutomatedMessage>, AppError> {
        let messages = AutomatedMessageRepository::new(self.db).get_all().await?;

        Ok(messages
            .into_iter()
            .map(AutomatedMessage::from_entity)
            .collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<AutomatedMessage>, AppError> {
        let message = AutomatedMessageRepository::new(self.db).get_by_id(id).await?;

        Ok(message.map(AutomatedMessage::from_entity))
    }

    /// Overwrites the type and channel bodies of a message, soft-failing when absent
    pub async fn update(
        &self,
        id: i32,
        params: AutomatedMessageParams,
    ) -> Result<UpdateOutcome<AutomatedMessage>, AppError> {
        let repo = AutomatedMessageRepository::new(self.db);

        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(UpdateOutcome::NotFound { message: NOT_FOUND });
        };

        let updated = repo.update(existing, params).await?;

        Ok(UpdateOutcome::Updated(AutomatedMessage::from_entity(updated)))
    }

    /// Deletes a message, soft-failing when absent
    pub async fn delete(&self, id: i32) -> Result<DeleteOutcome, AppError> {
        let repo = AutomatedMessageRepository::new(self.db);

        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(DeleteOutcome::not_found(NOT_FOUND_OR_DELETED));
        };

        repo.delete(existing).await?;

        Ok(DeleteOutcome::deleted(DELETED))
    }
}
