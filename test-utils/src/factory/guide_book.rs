//! Guidebook factory for creating test guidebook rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active guidebook for a listing.
///
/// # Arguments
/// - `db` - Database connection
/// - `listing_id` - Local key of the owning listing
/// - `content` - Guidebook body
///
/// # Returns
/// - `Ok(Model)` - Created guidebook entity
/// - `Err(DbErr)` - Database error during insertion
pub async fn create_guide_book(
    db: &DatabaseConnection,
    listing_id: i32,
    content: &str,
) -> Result<entity::guide_book::Model, DbErr> {
    entity::guide_book::ActiveModel {
        listing_id: ActiveValue::Set(listing_id),
        content: ActiveValue::Set(content.to_string()),
        is_active: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}
