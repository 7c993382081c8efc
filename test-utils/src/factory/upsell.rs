//! Upsell factory for creating test upsell offers.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test upsells with customizable fields.
pub struct UpsellFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    price: f64,
    status: i32,
}

impl<'a> UpsellFactory<'a> {
    /// Creates a new UpsellFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Upsell {id}"`
    /// - price: `25.0`
    /// - status: `1`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Upsell {}", next_id()),
            price: 25.0,
            status: 1,
        }
    }

    /// Sets the upsell title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the upsell price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the upsell into the database.
    pub async fn build(self) -> Result<entity::upsell::Model, DbErr> {
        let now = Utc::now();
        entity::upsell::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set("Test upsell description".to_string()),
            price: ActiveValue::Set(self.price),
            time_period: ActiveValue::Set("per stay".to_string()),
            availability: ActiveValue::Set("always".to_string()),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an upsell with default values.
pub async fn create_upsell(db: &DatabaseConnection) -> Result<entity::upsell::Model, DbErr> {
    UpsellFactory::new(db).build().await
}
