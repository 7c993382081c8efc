use sea_orm::DatabaseConnection;

use crate::server::{
    data::upsell::UpsellRepository,
    error::AppError,
    model::{
        outcome::{DeleteOutcome, UpdateOutcome},
        upsell::{Upsell, UpsellParams},
    },
};

const NOT_FOUND: &str = "Upsell not found!";
const NOT_FOUND_OR_DELETED: &str = "Upsell not found or already deleted.";
const DELETED: &str = "Upsell deleted successfully.";

pub struct UpsellService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UpsellService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new upsell
    pub async fn create(&self, params: UpsellParams) -> Result<Upsell, AppError> {
        let upsell = UpsellRepository::new(self.db).create(params).await?;

        Ok(Upsell::from_entity(upsell))
    }

    /// Gets all upsells
    pub async fn get_all(&self) -> Result<Vec<Upsell>, AppError> {
        let upsells = UpsellRepository::new(self.db).get_all().await?;

        Ok(upsells.into_iter().map(Upsell::from_entity).collect())
    }

    /// Gets an upsell by ID, `None` if it does not exist
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Upsell>, AppError> {
        let upsell = UpsellRepository::new(self.db).get_by_id(id).await?;

        Ok(upsell.map(Upsell::from_entity))
    }

    /// Overwrites all mutable fields of an upsell
    ///
    /// A missing upsell is reported through `UpdateOutcome::NotFound` without writing.
    pub async fn update(
        &self,
        id: i32,
        params: UpsellParams,
    ) -> Result<UpdateOutcome<Upsell>, AppError> {
        let repo = UpsellRepository::new(self.db);

        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(UpdateOutcome::NotFound { message: NOT_FOUND });
        };

        let updated = repo.update(existing, params).await?;

        Ok(UpdateOutcome::Updated(Upsell::from_entity(updated)))
    }

    /// Deletes an upsell
    ///
    /// A missing upsell is reported through a `status: false` outcome without writing.
    pub async fn delete(&self, id: i32) -> Result<DeleteOutcome, AppError> {
        let repo = UpsellRepository::new(self.db);

        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(DeleteOutcome::not_found(NOT_FOUND_OR_DELETED));
        };

        repo.delete(existing).await?;

        Ok(DeleteOutcome::deleted(DELETED))
    }
}
