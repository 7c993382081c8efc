use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingImageDto {
    pub id: i32,
    pub listing_id: i32,
    pub caption: Option<String>,
    pub vrbo_caption: Option<String>,
    pub airbnb_caption: Option<String>,
    pub url: String,
    pub sort_order: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuideBookDto {
    pub id: i32,
    pub listing_id: i32,
    pub content: String,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingDto {
    pub listing_id: i32,
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
    pub images: Vec<ListingImageDto>,
    /// Only populated by the list endpoint.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub guide_book: Option<GuideBookDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ListingsDto {
    pub success: bool,
    pub listings: Vec<ListingDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeviceIdDto {
    pub device_id: Option<String>,
}
