use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

/// Status value marking the current lock mapping of a listing.
pub const ACTIVE_LOCK_STATUS: i32 = 1;

pub struct ListingLockRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListingLockRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the active lock mapping for a listing
    ///
    /// Historical rows with any other status are ignored. Should several active rows
    /// exist, the most recently created one wins.
    ///
    /// # Arguments
    /// - `listing_id`: Local key of the listing (not the HostAway id)
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Active mapping found
    /// - `Ok(None)`: Listing has no active mapping
    /// - `Err(DbErr)`: Database error during query
    pub async fn find_active_by_listing_id(
        &self,
        listing_id: i32,
    ) -> Result<Option<entity::listing_lock_info::Model>, DbErr> {
        entity::prelude::ListingLockInfo::find()
            .filter(entity::listing_lock_info::Column::ListingId.eq(listing_id))
            .filter(entity::listing_lock_info::Column::Status.eq(ACTIVE_LOCK_STATUS))
            .order_by_desc(entity::listing_lock_info::Column::CreatedAt)
            .order_by_desc(entity::listing_lock_info::Column::Id)
            .one(self.db)
            .await
    }
}
