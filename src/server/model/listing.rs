//! Listing domain models and import parameters.
//!
//! Provides the listing aggregate (listing, images and guidebook) returned by the query
//! operations, plus the fully-defaulted insert parameters built from HostAway records.

use chrono::{DateTime, Utc};

use crate::{
    model::listing::{GuideBookDto, ListingDto, ListingImageDto},
    server::{
        client::hostaway::{RemoteListing, RemoteListingImage},
        error::hostaway::HostawayError,
    },
};

/// Stored when HostAway provides no Wi-Fi network name.
pub const NO_WIFI_PLACEHOLDER: &str = "(NO WIFI)";
/// Stored when HostAway provides no Wi-Fi password.
pub const NO_PASSWORD_PLACEHOLDER: &str = "(NO PASSWORD)";

/// Image attached to a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingImage {
    pub id: i32,
    /// Local key of the owning listing.
    pub listing_id: i32,
    pub caption: Option<String>,
    pub vrbo_caption: Option<String>,
    pub airbnb_caption: Option<String>,
    pub url: String,
    pub sort_order: i32,
}

impl ListingImage {
    pub fn from_entity(entity: entity::listing_image::Model) -> Self {
        Self {
            id: entity.id,
            listing_id: entity.listing_id,
            caption: entity.caption,
            vrbo_caption: entity.vrbo_caption,
            airbnb_caption: entity.airbnb_caption,
            url: entity.url,
            sort_order: entity.sort_order,
        }
    }

    pub fn into_dto(self) -> ListingImageDto {
        ListingImageDto {
            id: self.id,
            listing_id: self.listing_id,
            caption: self.caption,
            vrbo_caption: self.vrbo_caption,
            airbnb_caption: self.airbnb_caption,
            url: self.url,
            sort_order: self.sort_order,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuideBook {
    pub id: i32,
    pub listing_id: i32,
    pub content: String,
    pub is_active: bool,
}

impl GuideBook {
    pub fn from_entity(entity: entity::guide_book::Model) -> Self {
        Self {
            id: entity.id,
            listing_id: entity.listing_id,
            content: entity.content,
            is_active: entity.is_active,
        }
    }

    pub fn into_dto(self) -> GuideBookDto {
        GuideBookDto {
            id: self.id,
            listing_id: self.listing_id,
            content: self.content,
            is_active: self.is_active,
        }
    }
}

/// Listing with its images and optional guidebook.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    /// Local surrogate key.
    pub listing_id: i32,
    /// HostAway listing identifier.
    pub id: i64,
    pub name: String,
    pub description: String,
    pub external_listing_name: String,
    pub address: String,
    pub guests: i32,
    pub price: f64,
    pub guests_included: i32,
    pub price_for_extra_person: f64,
    pub currency_code: String,
    pub internal_listing_name: String,
    pub country: String,
    pub country_code: String,
    pub state: String,
    pub city: String,
    pub street: String,
    pub zipcode: String,
    pub lat: f64,
    pub lng: f64,
    pub property_type: String,
    pub check_in_time_start: i32,
    pub check_in_time_end: i32,
    pub check_out_time: i32,
    pub wifi_username: String,
    pub wifi_password: String,
    pub bookingcom_property_room_name: String,
    pub created_at: DateTime<Utc>,
    /// Images ordered by `sort_order`.
    pub images: Vec<ListingImage>,
    pub guide_book: Option<GuideBook>,
}

impl Listing {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// Images are sorted by `sort_order` so callers always see the display order.
    ///
    /// # Arguments
    /// - `entity` - The listing row
    /// - `images` - Image rows belonging to the listing
    /// - `guide_book` - The listing's guidebook row, if loaded and present
    pub fn from_entity(
        entity: entity::listing::Model,
        images: Vec<entity::listing_image::Model>,
        guide_book: Option<entity::guide_book::Model>,
    ) -> Self {
        let mut images: Vec<ListingImage> =
            images.into_iter().map(ListingImage::from_entity).collect();
        images.sort_by_key(|image| (image.sort_order, image.id));

        Self {
            listing_id: entity.listing_id,
            id: entity.id,
            name: entity.name,
            description: entity.description,
            external_listing_name: entity.external_listing_name,
            address: entity.address,
            guests: entity.guests,
            price: entity.price,
            guests_included: entity.guests_included,
            price_for_extra_person: entity.price_for_extra_person,
            currency_code: entity.currency_code,
            internal_listing_name: entity.internal_listing_name,
            country: entity.country,
            country_code: entity.country_code,
            state: entity.state,
            city: entity.city,
            street: entity.street,
            zipcode: entity.zipcode,
            lat: entity.lat,
            lng: entity.lng,
            property_type: entity.property_type,
            check_in_time_start: entity.check_in_time_start,
            check_in_time_end: entity.check_in_time_end,
            check_out_time: entity.check_out_time,
            wifi_username: entity.wifi_username,
            wifi_password: entity.wifi_password,
            bookingcom_property_room_name: entity.bookingcom_property_room_name,
            created_at: entity.created_at,
            images,
            guide_book: guide_book.map(GuideBook::from_entity),
        }
    }

    pub fn into_dto(self) -> ListingDto {
        ListingDto {
            listing_id: self.listing_id,
            id: self.id,
            name: self.name,
            description: self.description,
            external_listing_name: self.external_listing_name,
            address: self.address,
            guests: self.guests,
            price: self.price,
            guests_included: self.guests_included,
            price_for_extra_person: self.price_for_extra_person,
            currency_code: self.currency_code,
            internal_listing_name: self.internal_listing_name,
            country: self.country,
            country_code: self.country_code,
            state: self.state,
            city: self.city,
            street: self.street,
            zipcode: self.zipcode,
            lat: self.lat,
            lng: self.lng,
            property_type: self.property_type,
            check_in_time_start: self.check_in_time_start,
            check_in_time_end: self.check_in_time_end,
            check_out_time: self.check_out_time,
            wifi_username: self.wifi_username,
            wifi_password: self.wifi_password,
            bookingcom_property_room_name: self.bookingcom_property_room_name,
            created_at: self.created_at,
            images: self.images.into_iter().map(ListingImage::into_dto).collect(),
            guide_book: self.guide_book.map(GuideBook::into_dto),
        }
    }
}

/// Fully populated listing row ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewListing {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub external_listing_name: String,
    pub address: String,
    pub guests: i32,
    pub price: f64,
    pub guests_included: i32,
    pub price_for_extra_person: f64,
    pub currency_code: String,
    pub internal_listing_name: String,
    pub country: String,
    pub country_code: String,
    pub state: String,
    pub city: String,
    pub street: String,
    pub zipcode: String,
    pub lat: f64,
    pub lng: f64,
    pub property_type: String,
    pub check_in_time_start: i32,
    pub check_in_time_end: i32,
    pub check_out_time: i32,
    pub wifi_username: String,
    pub wifi_password: String,
    pub bookingcom_property_room_name: String,
}

/// Image row ready for insertion once the owning listing's key is known.
#[derive(Debug, Clone, PartialEq)]
pub struct NewListingImage {
    pub caption: Option<String>,
    pub vrbo_caption: Option<String>,
    pub airbnb_caption: Option<String>,
    pub url: String,
    pub sort_order: i32,
}

/// Treats absent and empty strings alike, falling back to `default`.
fn text_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl NewListing {
    /// Builds insert parameters from a HostAway record, applying the field defaults.
    ///
    /// Text fields default to `""`, numeric fields to `0`, and the Wi-Fi credentials to
    /// `"(NO WIFI)"` / `"(NO PASSWORD)"`. The property type is taken from the Booking.com
    /// room name.
    ///
    /// # Arguments
    /// - `remote` - Listing as returned by HostAway
    /// - `position` - Position of the record in the remote payload, for error reporting
    ///
    /// # Returns
    /// - `Ok((NewListing, Vec<NewListingImage>))` - Listing and image parameters
    /// - `Err(HostawayError::MissingListingId)` - The record has no `id`
    pub fn from_remote(
        remote: RemoteListing,
        position: usize,
    ) -> Result<(Self, Vec<NewListingImage>), HostawayError> {
        let id = remote
            .id
            .ok_or(HostawayError::MissingListingId { position })?;

        let images = remote
            .listing_images
            .unwrap_or_default()
            .into_iter()
            .map(NewListingImage::from_remote)
            .collect();

        let bookingcom_property_room_name = text_or(remote.bookingcom_property_room_name, "");

        let listing = Self {
            id,
            name: text_or(remote.name, ""),
            description: text_or(remote.description, ""),
            external_listing_name: text_or(remote.external_listing_name, ""),
            address: text_or(remote.address, ""),
            guests: remote.person_capacity.unwrap_or(0),
            price: remote.price.unwrap_or(0.0),
            guests_included: remote.guests_included.unwrap_or(0),
            price_for_extra_person: remote.price_for_extra_person.unwrap_or(0.0),
            currency_code: text_or(remote.currency_code, ""),
            internal_listing_name: text_or(remote.internal_listing_name, ""),
            country: text_or(remote.country, ""),
            country_code: text_or(remote.country_code, ""),
            state: text_or(remote.state, ""),
            city: text_or(remote.city, ""),
            street: text_or(remote.street, ""),
            zipcode: text_or(remote.zipcode, ""),
            lat: remote.lat.unwrap_or(0.0),
            lng: remote.lng.unwrap_or(0.0),
            property_type: bookingcom_property_room_name.clone(),
            check_in_time_start: remote.check_in_time_start.unwrap_or(0),
            check_in_time_end: remote.check_in_time_end.unwrap_or(0),
            check_out_time: remote.check_out_time.unwrap_or(0),
            wifi_username: text_or(remote.wifi_username, NO_WIFI_PLACEHOLDER),
            wifi_password: text_or(remote.wifi_password, NO_PASSWORD_PLACEHOLDER),
            bookingcom_property_room_name,
        };

        Ok((listing, images))
    }
}

impl NewListingImage {
    pub fn from_remote(remote: RemoteListingImage) -> Self {
        Self {
            caption: remote.caption,
            vrbo_caption: remote.vrbo_caption,
            airbnb_caption: remote.airbnb_caption,
            url: remote.url.unwrap_or_default(),
            sort_order: remote.sort_order.unwrap_or(0),
        }
    }
}

/// Counts produced by one run of the listing import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    /// Listings fetched from HostAway.
    pub fetched: usize,
    /// Listings inserted because they were not present locally.
    pub inserted_listings: usize,
    /// Image rows inserted for the new listings.
    pub inserted_images: usize,
}
