use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A rental property imported from HostAway.
///
/// `listing_id` is the local surrogate key referenced by images, guidebooks and lock
/// mappings. `id` is the HostAway listing identifier and is unique per row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "listing")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub listing_id: i32,
    #[sea_orm(unique)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text")]
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
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::listing_image::Entity")]
    ListingImage,
    #[sea_orm(has_one = "super::guide_book::Entity")]
    GuideBook,
}

impl Related<super::listing_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ListingImage.def()
    }
}

impl Related<super::guide_book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuideBook.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
