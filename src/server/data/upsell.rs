//! Upsell data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryOrder,
};

use crate::server::model::upsell::UpsellParams;

/// Repository providing CRUD operations for upsell offers.
pub struct UpsellRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UpsellRepository<'a> {
    /// Creates a new UpsellRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new upsell.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created upsell with generated ID and timestamps
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: UpsellParams) -> Result<entity::upsell::Model, DbErr> {
        let now = Utc::now();

        entity::upsell::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            time_period: ActiveValue::Set(params.time_period),
            availability: ActiveValue::Set(params.availability),
            status: ActiveValue::Set(params.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all upsells ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<entity::upsell::Model>, DbErr> {
        entity::prelude::Upsell::find()
            .order_by_asc(entity::upsell::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets an upsell by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Upsell found
    /// - `Ok(None)` - No upsell with this ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::upsell::Model>, DbErr> {
        entity::prelude::Upsell::find_by_id(id).one(self.db).await
    }

    /// Overwrites every mutable field of an existing upsell.
    ///
    /// # Arguments
    /// - `existing` - The currently stored row
    /// - `params` - New field values
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated upsell
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        existing: entity::upsell::Model,
        params: UpsellParams,
    ) -> Result<entity::upsell::Model, DbErr> {
        let mut active_model: entity::upsell::ActiveModel = existing.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.description = ActiveValue::Set(params.description);
        active_model.price = ActiveValue::Set(params.price);
        active_model.time_period = ActiveValue::Set(params.time_period);
        active_model.availability = ActiveValue::Set(params.availability);
        active_model.status = ActiveValue::Set(params.status);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Removes an existing upsell.
    pub async fn delete(&self, existing: entity::upsell::Model) -> Result<(), DbErr> {
        existing.delete(self.db).await?;

        Ok(())
    }
}
