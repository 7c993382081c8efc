//! Listing data repository for database operations.
//!
//! Handles lookups by both listing keys, inserts of imported listings, and eager loading
//! of images and guidebooks for the query endpoints.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::listing::NewListing;

/// Listing row with its image rows and optional guidebook row.
pub type ListingWithRelations = (
    entity::listing::Model,
    Vec<entity::listing_image::Model>,
    Option<entity::guide_book::Model>,
);

/// Repository providing database operations for listings.
///
/// Generic over the connection so the same queries run on the pool or inside a
/// transaction.
pub struct ListingRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ListingRepository<'a, C> {
    /// Creates a new ListingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a listing by its HostAway identifier.
    ///
    /// # Arguments
    /// - `id` - HostAway listing id
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Listing found
    /// - `Ok(None)` - No local listing carries this id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_remote_id(
        &self,
        id: i64,
    ) -> Result<Option<entity::listing::Model>, DbErr> {
        entity::prelude::Listing::find()
            .filter(entity::listing::Column::Id.eq(id))
            .one(self.db)
            .await
    }

    /// Inserts a new listing row.
    ///
    /// # Arguments
    /// - `params` - Fully defaulted listing fields
    ///
    /// # Returns
    /// - `Ok(Model)` - Inserted listing including its generated `listing_id`
    /// - `Err(DbErr)` - Database error, e.g. unique violation on `id`
    pub async fn create(&self, params: NewListing) -> Result<entity::listing::Model, DbErr> {
        entity::listing::ActiveModel {
            id: ActiveValue::Set(params.id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            external_listing_name: ActiveValue::Set(params.external_listing_name),
            address: ActiveValue::Set(params.address),
            guests: ActiveValue::Set(params.guests),
            price: ActiveValue::Set(params.price),
            guests_included: ActiveValue::Set(params.guests_included),
            price_for_extra_person: ActiveValue::Set(params.price_for_extra_person),
            currency_code: ActiveValue::Set(params.currency_code),
            internal_listing_name: ActiveValue::Set(params.internal_listing_name),
            country: ActiveValue::Set(params.country),
            country_code: ActiveValue::Set(params.country_code),
            state: ActiveValue::Set(params.state),
            city: ActiveValue::Set(params.city),
            street: ActiveValue::Set(params.street),
            zipcode: ActiveValue::Set(params.zipcode),
            lat: ActiveValue::Set(params.lat),
            lng: ActiveValue::Set(params.lng),
            property_type: ActiveValue::Set(params.property_type),
            check_in_time_start: ActiveValue::Set(params.check_in_time_start),
            check_in_time_end: ActiveValue::Set(params.check_in_time_end),
            check_out_time: ActiveValue::Set(params.check_out_time),
            wifi_username: ActiveValue::Set(params.wifi_username),
            wifi_password: ActiveValue::Set(params.wifi_password),
            bookingcom_property_room_name: ActiveValue::Set(params.bookingcom_property_room_name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets every listing with its images and guidebook.
    ///
    /// Images are loaded with a left join so listings without images are included with an
    /// empty vector. Guidebooks are fetched in a second query keyed by `listing_id`.
    ///
    /// # Returns
    /// - `Ok(Vec<ListingWithRelations>)` - Listings ordered by `listing_id`
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all_with_relations(&self) -> Result<Vec<ListingWithRelations>, DbErr> {
        let listings = entity::prelude::Listing::find()
            .order_by_asc(entity::listing::Column::ListingId)
            .find_with_related(entity::prelude::ListingImage)
            .all(self.db)
            .await?;

        let listing_ids: Vec<i32> = listings.iter().map(|(l, _)| l.listing_id).collect();

        let mut guide_books: HashMap<i32, entity::guide_book::Model> =
            entity::prelude::GuideBook::find()
                .filter(entity::guide_book::Column::ListingId.is_in(listing_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|g| (g.listing_id, g))
                .collect();

        Ok(listings
            .into_iter()
            .map(|(listing, images)| {
                let guide_book = guide_books.remove(&listing.listing_id);
                (listing, images, guide_book)
            })
            .collect())
    }

    /// Gets a listing by its local key together with its images.
    ///
    /// # Arguments
    /// - `listing_id` - Local listing key
    ///
    /// # Returns
    /// - `Ok(Some((listing, images)))` - Listing found
    /// - `Ok(None)` - No listing with this key
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_listing_id_with_images(
        &self,
        listing_id: i32,
    ) -> Result<Option<(entity::listing::Model, Vec<entity::listing_image::Model>)>, DbErr> {
        let Some(listing) = entity::prelude::Listing::find_by_id(listing_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let images = entity::prelude::ListingImage::find()
            .filter(entity::listing_image::Column::ListingId.eq(listing_id))
            .order_by_asc(entity::listing_image::Column::SortOrder)
            .all(self.db)
            .await?;

        Ok(Some((listing, images)))
    }
}
