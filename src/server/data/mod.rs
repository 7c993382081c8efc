//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally. The
//! listing repositories are generic over `ConnectionTrait` so the import workflow can run
//! them against a `DatabaseTransaction`.

pub mod automated_message;
pub mod listing;
pub mod listing_image;
pub mod listing_lock;
pub mod upsell;

#[cfg(test)]
mod test;
