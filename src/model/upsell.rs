use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for both creating and updating an upsell.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsellRequestDto {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub time_period: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default = "default_status")]
    pub status: i32,
}

fn default_status() -> i32 {
    1
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsellDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub time_period: String,
    pub availability: String,
    pub status: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
