//! Shared helper utilities for factory methods.
//!
//! Provides unique id generation used by every factory and convenience methods for
//! creating entities together with their dependent rows.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a listing with two images and an active lock mapping.
///
/// All entities use default values. Use the individual factories to customize them.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((listing, images, lock))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_listing_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::listing::Model,
        Vec<entity::listing_image::Model>,
        entity::listing_lock_info::Model,
    ),
    DbErr,
> {
    let listing = crate::factory::listing::create_listing(db).await?;
    let first = crate::factory::listing_image::ListingImageFactory::new(db, listing.listing_id)
        .sort_order(0)
        .build()
        .await?;
    let second = crate::factory::listing_image::ListingImageFactory::new(db, listing.listing_id)
        .sort_order(1)
        .build()
        .await?;
    let lock = crate::factory::listing_lock_info::create_lock_info(db, listing.listing_id).await?;

    Ok((listing, vec![first, second], lock))
}
