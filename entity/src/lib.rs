//! SeaORM entity models for the boarding pass database.
//!
//! Each module mirrors one table created by the `migration` crate. The `prelude` module
//! re-exports every `Entity` under its table-oriented name for concise queries.

pub mod prelude;

pub mod automated_message;
pub mod guide_book;
pub mod listing;
pub mod listing_image;
pub mod listing_lock_info;
pub mod upsell;
