use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Historical mapping between a listing and a physical lock device.
///
/// `listing_id` holds the listing's local key. Only rows with `status == 1` are current.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "listing_lock_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub listing_id: i32,
    pub lock_id: String,
    pub status: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
