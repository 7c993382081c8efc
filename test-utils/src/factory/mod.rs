//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let listing = factory::listing::create_listing(&db).await?;
//!
//!     // Create a listing with images and an active lock mapping
//!     let (listing, images, lock) =
//!         factory::helpers::create_listing_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let listing = factory::listing::ListingFactory::new(&db)
//!     .id(42)
//!     .name("Lake House")
//!     .build()
//!     .await?;
//! ```

pub mod automated_message;
pub mod guide_book;
pub mod helpers;
pub mod listing;
pub mod listing_image;
pub mod listing_lock_info;
pub mod upsell;

pub use automated_message::create_automated_message;
pub use guide_book::create_guide_book;
pub use listing::create_listing;
pub use listing_image::create_listing_image;
pub use listing_lock_info::create_lock_info;
pub use upsell::create_upsell;
