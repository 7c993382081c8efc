use crate::server::{
    client::hostaway::{ListingSource, RemoteListing},
    error::{hostaway::HostawayError, AppError},
    service::listing::ListingService,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, fixture::hostaway};
use tracing_test::traced_test;

mod get_device_id_by_listing_id;
mod get_listing_by_id;

/// Listing source serving canned HostAway payloads.
struct StubSource {
    listings: Vec<serde_json::Value>,
}

impl StubSource {
    fn new(listings: Vec<serde_json::Value>) -> Self {
        Self { listings }
    }
}

#[async_trait::async_trait]
impl ListingSource for StubSource {
    async fn fetch_listings(&self) -> Result<Vec<RemoteListing>, AppError> {
        Ok(self
            .listings
            .iter()
            .cloned()
            .map(|value| serde_json::from_value(value).unwrap())
            .collect())
    }
}

/// Listing source whose fetch always fails.
struct UnavailableSource;

#[async_trait::async_trait]
impl ListingSource for UnavailableSource {
    async fn fetch_listings(&self) -> Result<Vec<RemoteListing>, AppError> {
        Err(HostawayError::HttpStatus {
            endpoint: "/listings".to_string(),
            status: 503,
        }
        .into())
    }
}
