//! Listing image factory for creating test image rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test listing images attached to an existing listing.
pub struct ListingImageFactory<'a> {
    db: &'a DatabaseConnection,
    listing_id: i32,
    caption: Option<String>,
    url: String,
    sort_order: i32,
}

impl<'a> ListingImageFactory<'a> {
    /// Creates a new ListingImageFactory with default values.
    ///
    /// Defaults:
    /// - caption: `Some("Image {id}")`
    /// - url: `"https://images.test/{id}.jpg"`
    /// - sort_order: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `listing_id` - Local key of the owning listing
    pub fn new(db: &'a DatabaseConnection, listing_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            listing_id,
            caption: Some(format!("Image {}", id)),
            url: format!("https://images.test/{}.jpg", id),
            sort_order: 0,
        }
    }

    /// Sets the generic caption.
    pub fn caption(mut self, caption: Option<String>) -> Self {
        self.caption = caption;
        self
    }

    /// Sets the sort order.
    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Builds and inserts the image entity into the database.
    pub async fn build(self) -> Result<entity::listing_image::Model, DbErr> {
        entity::listing_image::ActiveModel {
            listing_id: ActiveValue::Set(self.listing_id),
            caption: ActiveValue::Set(self.caption),
            vrbo_caption: ActiveValue::Set(None),
            airbnb_caption: ActiveValue::Set(None),
            url: ActiveValue::Set(self.url),
            sort_order: ActiveValue::Set(self.sort_order),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a listing image with default values.
pub async fn create_listing_image(
    db: &DatabaseConnection,
    listing_id: i32,
) -> Result<entity::listing_image::Model, DbErr> {
    ListingImageFactory::new(db, listing_id).build().await
}
