//! HostAway property API client.
//!
//! Fetches the account's listings, each with its nested images. The import workflow only
//! depends on the `ListingSource` trait so it can be driven by canned data in tests.

use serde::Deserialize;

use crate::server::error::{hostaway::HostawayError, AppError};

/// Number of listings requested per page from `/listings`.
const PAGE_SIZE: usize = 100;

/// Listing record as returned by HostAway.
///
/// Every field is optional because HostAway omits or nulls fields freely. Defaults are
/// applied when the record is converted into a `NewListing`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteListing {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub external_listing_name: Option<String>,
    pub address: Option<String>,
    pub person_capacity: Option<i32>,
    pub price: Option<f64>,
    pub guests_included: Option<i32>,
    pub price_for_extra_person: Option<f64>,
    pub currency_code: Option<String>,
    pub internal_listing_name: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub street: Option<String>,
    pub zipcode: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub bookingcom_property_room_name: Option<String>,
    pub check_in_time_start: Option<i32>,
    pub check_in_time_end: Option<i32>,
    pub check_out_time: Option<i32>,
    pub wifi_username: Option<String>,
    pub wifi_password: Option<String>,
    #[serde(default)]
    pub listing_images: Option<Vec<RemoteListingImage>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteListingImage {
    pub caption: Option<String>,
    pub vrbo_caption: Option<String>,
    pub airbnb_caption: Option<String>,
    pub url: Option<String>,
    pub sort_order: Option<i32>,
}

/// Response envelope shared by HostAway list endpoints.
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    pub status: String,
    #[serde(default = "Vec::new")]
    pub result: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    access_token: String,
}

/// Source of remote listings for the import workflow.
#[async_trait::async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetches every listing available to the account.
    async fn fetch_listings(&self) -> Result<Vec<RemoteListing>, AppError>;
}

/// HTTP client for the HostAway public API.
#[derive(Clone)]
pub struct HostawayClient {
    http_client: reqwest::Client,
    base_url: String,
    account_id: String,
    api_key: String,
}

impl HostawayClient {
    /// Creates a new HostAway client.
    ///
    /// # Arguments
    /// - `http_client` - Shared reqwest client
    /// - `base_url` - API root, e.g. `https://api.hostaway.com/v1`
    /// - `account_id` - HostAway account id, used as OAuth client id
    /// - `api_key` - HostAway API key, used as OAuth client secret
    pub fn new(
        http_client: reqwest::Client,
        base_url: impl Into<String>,
        account_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            account_id: account_id.into(),
            api_key: api_key.into(),
        }
    }

    /// Exchanges the account credentials for a bearer token.
    async fn access_token(&self) -> Result<String, AppError> {
        let endpoint = format!("{}/accessTokens", self.base_url);
        let response = self
            .http_client
            .post(&endpoint)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.account_id.as_str()),
                ("client_secret", self.api_key.as_str()),
                ("scope", "general"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(HostawayError::HttpStatus {
                endpoint: "/accessTokens".to_string(),
                status: response.status().as_u16(),
            }
            .into());
        }

        let token: AccessTokenResponse = response.json().await?;

        Ok(token.access_token)
    }

    /// Fetches a single page of listings.
    async fn fetch_page(
        &self,
        token: &str,
        offset: usize,
    ) -> Result<Vec<RemoteListing>, AppError> {
        let endpoint = format!("{}/listings", self.base_url);
        let response = self
            .http_client
            .get(&endpoint)
            .bearer_auth(token)
            .query(&[("limit", PAGE_SIZE), ("offset", offset)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(HostawayError::HttpStatus {
                endpoint: "/listings".to_string(),
                status: response.status().as_u16(),
            }
            .into());
        }

        let body: ListResponse<RemoteListing> = response.json().await?;

        if body.status != "success" {
            return Err(HostawayError::Unsuccessful(body.status).into());
        }

        Ok(body.result)
    }
}

#[async_trait::async_trait]
impl ListingSource for HostawayClient {
    async fn fetch_listings(&self) -> Result<Vec<RemoteListing>, AppError> {
        let token = self.access_token().await?;

        let mut listings = Vec::new();
        loop {
            let page = self.fetch_page(&token, listings.len()).await?;
            let page_len = page.len();
            listings.extend(page);

            if page_len < PAGE_SIZE {
                break;
            }
        }

        tracing::debug!("Fetched {} listings from HostAway", listings.len());

        Ok(listings)
    }
}
