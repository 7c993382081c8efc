//! Lock mapping factory for creating listing lock rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating listing-to-lock mappings.
///
/// # Example
///
/// ```rust,ignore
/// let retired = LockInfoFactory::new(&db, listing.listing_id)
///     .lock_id("old-lock")
///     .status(0)
///     .build()
///     .await?;
/// ```
pub struct LockInfoFactory<'a> {
    db: &'a DatabaseConnection,
    listing_id: i32,
    lock_id: String,
    status: i32,
}

impl<'a> LockInfoFactory<'a> {
    /// Creates a new LockInfoFactory with default values.
    ///
    /// Defaults:
    /// - lock_id: `"lock-{id}"`
    /// - status: `1` (active)
    pub fn new(db: &'a DatabaseConnection, listing_id: i32) -> Self {
        Self {
            db,
            listing_id,
            lock_id: format!("lock-{}", next_id()),
            status: 1,
        }
    }

    /// Sets the lock device identifier.
    pub fn lock_id(mut self, lock_id: impl Into<String>) -> Self {
        self.lock_id = lock_id.into();
        self
    }

    /// Sets the mapping status (`1` = active).
    pub fn status(mut self, status: i32) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the lock mapping into the database.
    pub async fn build(self) -> Result<entity::listing_lock_info::Model, DbErr> {
        entity::listing_lock_info::ActiveModel {
            listing_id: ActiveValue::Set(self.listing_id),
            lock_id: ActiveValue::Set(self.lock_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active lock mapping for a listing.
pub async fn create_lock_info(
    db: &DatabaseConnection,
    listing_id: i32,
) -> Result<entity::listing_lock_info::Model, DbErr> {
    LockInfoFactory::new(db, listing_id).build().await
}
