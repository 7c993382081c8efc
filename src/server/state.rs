//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources needed by
//! the handlers. The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::client::hostaway::ListingSource;

/// Application state containing shared resources and dependencies.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a pool handle and the listing
/// source sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Provider of remote listings for the import endpoint.
    ///
    /// The HostAway client in production, a canned source in tests.
    pub listing_source: Arc<dyn ListingSource>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `listing_source` - Remote listing provider
    pub fn new(db: DatabaseConnection, listing_source: Arc<dyn ListingSource>) -> Self {
        Self { db, listing_source }
    }
}
