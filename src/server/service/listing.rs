use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    client::hostaway::{ListingSource, RemoteListing},
    data::{
        listing::ListingRepository, listing_image::ListingImageRepository,
        listing_lock::ListingLockRepository,
    },
    error::AppError,
    model::listing::{Listing, NewListing, SyncSummary},
};

pub struct ListingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Imports HostAway listings that are not yet stored locally
    ///
    /// Fetches the full remote listing set, then inside one transaction inserts every
    /// listing whose HostAway id is unknown, followed by its images. Listings already
    /// present are left untouched, so repeated runs against unchanged data write nothing.
    /// Any failure rolls back the whole batch.
    ///
    /// # Arguments
    /// - `source`: Provider of remote listings, normally the HostAway client
    ///
    /// # Returns
    /// - `Ok(SyncSummary)`: Counts of fetched and inserted rows
    /// - `Err(AppError)`: Fetch, data-quality or database error; nothing was written
    pub async fn sync_listings(&self, source: &dyn ListingSource) -> Result<SyncSummary, AppError> {
        let remote_listings = source
            .fetch_listings()
            .await
            .inspect_err(|e| tracing::error!("Error fetching listings: {}", e))?;

        let txn = self
            .db
            .begin()
            .await
            .inspect_err(|e| tracing::error!("Error syncing listings: {}", e))?;

        let result = match Self::import(&txn, remote_listings).await {
            Ok(summary) => txn.commit().await.map(|_| summary).map_err(AppError::from),
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Failed to rollback listing sync: {}", rollback_err);
                }

                Err(e)
            }
        };

        match result {
            Ok(summary) => {
                tracing::info!(
                    "Listing sync complete: {} fetched, {} listings and {} images inserted",
                    summary.fetched,
                    summary.inserted_listings,
                    summary.inserted_images
                );

                Ok(summary)
            }
            Err(e) => {
                tracing::error!("Error syncing listings: {}", e);

                Err(e)
            }
        }
    }

    /// Inserts absent listings and their images using the open transaction.
    async fn import(
        txn: &DatabaseTransaction,
        remote_listings: Vec<RemoteListing>,
    ) -> Result<SyncSummary, AppError> {
        let listing_repo = ListingRepository::new(txn);
        let image_repo = ListingImageRepository::new(txn);

        let mut summary = SyncSummary {
            fetched: remote_listings.len(),
            ..Default::default()
        };

        for (position, remote) in remote_listings.into_iter().enumerate() {
            let (new_listing, images) = NewListing::from_remote(remote, position)?;

            if listing_repo
                .find_by_remote_id(new_listing.id)
                .await?
                .is_some()
            {
                continue;
            }

            let saved = listing_repo.create(new_listing).await?;
            summary.inserted_images += image_repo.create_many(saved.listing_id, images).await?;
            summary.inserted_listings += 1;
        }

        Ok(summary)
    }

    /// Gets every listing with images and guidebook
    pub async fn get_listings(&self) -> Result<Vec<Listing>, AppError> {
        let rows = ListingRepository::new(self.db)
            .get_all_with_relations()
            .await
            .inspect_err(|e| tracing::error!("Error fetching listings: {}", e))?;

        Ok(rows
            .into_iter()
            .map(|(listing, images, guide_book)| Listing::from_entity(listing, images, guide_book))
            .collect())
    }

    /// Gets a listing with its images by local key
    ///
    /// # Returns
    /// - `Ok(Some(Listing))`: Listing found
    /// - `Ok(None)`: No listing with this key
    /// - `Err(AppError)`: Database error
    pub async fn get_listing_by_id(&self, listing_id: i32) -> Result<Option<Listing>, AppError> {
        let result = ListingRepository::new(self.db)
            .get_by_listing_id_with_images(listing_id)
            .await?;

        Ok(result.map(|(listing, images)| Listing::from_entity(listing, images, None)))
    }

    /// Resolves the active lock device of a listing
    ///
    /// Looks the listing up by HostAway id, then reads the active lock mapping stored
    /// under the listing's local key.
    ///
    /// # Arguments
    /// - `id`: HostAway listing id
    ///
    /// # Returns
    /// - `Ok(Some(lock_id))`: Device id of the active mapping
    /// - `Ok(None)`: Unknown listing or no active mapping
    /// - `Err(AppError)`: Database error
    pub async fn get_device_id_by_listing_id(&self, id: i64) -> Result<Option<String>, AppError> {
        let Some(listing) = ListingRepository::new(self.db).find_by_remote_id(id).await? else {
            return Ok(None);
        };

        let lock = ListingLockRepository::new(self.db)
            .find_active_by_listing_id(listing.listing_id)
            .await?;

        Ok(lock.map(|l| l.lock_id))
    }
}
