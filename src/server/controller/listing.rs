use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessMessageDto},
        listing::{DeviceIdDto, ListingDto, ListingsDto},
    },
    server::{error::AppError, service::listing::ListingService, state::AppState},
};

/// Tag for grouping listing endpoints in OpenAPI documentation
pub static LISTING_TAG: &str = "listing";

/// Get all listings.
///
/// Returns every locally stored listing with its images and, when one exists, its
/// guidebook.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - All listings wrapped in `{ success, listings }`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/listings",
    tag = LISTING_TAG,
    responses(
        (status = 200, description = "Successfully retrieved listings", body = ListingsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_listings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let listings = ListingService::new(&state.db).get_listings().await?;

    Ok((
        StatusCode::OK,
        Json(ListingsDto {
            success: true,
            listings: listings.into_iter().map(|l| l.into_dto()).collect(),
        }),
    ))
}

/// Get a listing by its local key.
///
/// Responds with JSON `null` when no listing matches, including when the key is not a
/// number.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `listing_id` - Local listing key as given in the path
///
/// # Returns
/// - `200 OK` - The listing with its images, or `null`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/listings/{id}",
    tag = LISTING_TAG,
    params(
        ("id" = String, Path, description = "Local listing key")
    ),
    responses(
        (status = 200, description = "Listing or null", body = ListingDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_listing_by_id(
    State(state): State<AppState>,
    Path(listing_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let listing = match listing_id.parse::<i32>() {
        Ok(listing_id) => {
            ListingService::new(&state.db)
                .get_listing_by_id(listing_id)
                .await?
        }
        Err(_) => None,
    };

    Ok((StatusCode::OK, Json(listing.map(|l| l.into_dto()))))
}

/// Get the lock device assigned to a listing.
///
/// Resolves the listing by HostAway id and returns the device id of its active lock
/// mapping. `deviceId` is `null` when either the listing or the mapping is missing.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - HostAway listing id
///
/// # Returns
/// - `200 OK` - `{ deviceId }`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/listings/{id}/device",
    tag = LISTING_TAG,
    params(
        ("id" = i64, Path, description = "HostAway listing id")
    ),
    responses(
        (status = 200, description = "Active lock device id", body = DeviceIdDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_device_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let device_id = ListingService::new(&state.db)
        .get_device_id_by_listing_id(id)
        .await?;

    Ok((StatusCode::OK, Json(DeviceIdDto { device_id })))
}

/// Import listings from HostAway.
///
/// Inserts every remote listing not yet stored locally together with its images. The
/// import is all-or-nothing.
///
/// # Arguments
/// - `state` - Application state containing the database connection and listing source
///
/// # Returns
/// - `200 OK` - Import committed
/// - `502 Bad Gateway` - HostAway unreachable or returned unusable data
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/listings/sync",
    tag = LISTING_TAG,
    responses(
        (status = 200, description = "Listings synced", body = SuccessMessageDto),
        (status = 502, description = "Listing provider failure", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sync_listings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    ListingService::new(&state.db)
        .sync_listings(state.listing_source.as_ref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(SuccessMessageDto {
            success: true,
            message: "Listing synced successfully!".to_string(),
        }),
    ))
}
