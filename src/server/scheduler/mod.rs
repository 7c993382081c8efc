pub mod listing_sync;
