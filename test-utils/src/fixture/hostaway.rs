//! HostAway API payload fixtures.
//!
//! Builds JSON documents shaped like the responses of the HostAway `/listings` endpoint so
//! that tests can deserialize them through the same path as live data.

use serde_json::{json, Value};

/// Builds a fully populated HostAway listing with `image_count` images.
///
/// # Arguments
/// - `id` - HostAway listing identifier
/// - `image_count` - Number of entries in `listingImages`
///
/// # Returns
/// - `Value` - Listing JSON object
pub fn listing_json(id: i64, image_count: usize) -> Value {
    let images: Vec<Value> = (0..image_count)
        .map(|i| {
            json!({
                "id": id * 100 + i as i64,
                "caption": format!("Photo {}", i),
                "vrboCaption": format!("VRBO photo {}", i),
                "airbnbCaption": format!("Airbnb photo {}", i),
                "url": format!("https://cdn.hostaway.test/{}/{}.jpg", id, i),
                "sortOrder": i,
            })
        })
        .collect();

    json!({
        "id": id,
        "name": format!("Listing {}", id),
        "description": "Two bedroom apartment close to downtown",
        "externalListingName": format!("External {}", id),
        "address": "500 Congress Ave, Austin, TX",
        "personCapacity": 6,
        "price": 189.5,
        "guestsIncluded": 2,
        "priceForExtraPerson": 20,
        "currencyCode": "USD",
        "internalListingName": format!("Internal {}", id),
        "country": "United States",
        "countryCode": "US",
        "state": "TX",
        "city": "Austin",
        "street": "Congress Ave",
        "zipcode": "78701",
        "lat": 30.2672,
        "lng": -97.7431,
        "bookingcomPropertyRoomName": "Apartment",
        "checkInTimeStart": 16,
        "checkInTimeEnd": 23,
        "checkOutTime": 11,
        "wifiUsername": "Congress-Guest",
        "wifiPassword": "welcome500",
        "listingImages": images,
    })
}

/// Builds a HostAway listing that carries only its identifier.
///
/// Every optional field is absent, including `listingImages`.
pub fn sparse_listing_json(id: i64) -> Value {
    json!({ "id": id })
}

/// Wraps listings in the HostAway list response envelope.
pub fn listings_response_json(listings: Vec<Value>) -> Value {
    let count = listings.len();
    json!({
        "status": "success",
        "result": listings,
        "count": count,
    })
}
