use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::server::model::listing::NewListingImage;

/// Repository for listing images. Images are only ever created by the listing import.
pub struct ListingImageRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ListingImageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the images of a newly imported listing.
    ///
    /// An empty slice performs no queries.
    ///
    /// # Arguments
    /// - `listing_id` - Local key of the owning listing
    /// - `images` - Image fields from HostAway
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of rows inserted
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_many(
        &self,
        listing_id: i32,
        images: Vec<NewListingImage>,
    ) -> Result<usize, DbErr> {
        let count = images.len();

        for image in images {
            entity::listing_image::ActiveModel {
                listing_id: ActiveValue::Set(listing_id),
                caption: ActiveValue::Set(image.caption),
                vrbo_caption: ActiveValue::Set(image.vrbo_caption),
                airbnb_caption: ActiveValue::Set(image.airbnb_caption),
                url: ActiveValue::Set(image.url),
                sort_order: ActiveValue::Set(image.sort_order),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(count)
    }
}
