use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "automated_message")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub message_type: String,
    #[sea_orm(column_type = "Text")]
    pub sms_message: String,
    #[sea_orm(column_type = "Text")]
    pub email_message: String,
    #[sea_orm(column_type = "Text")]
    pub air_bnb_message: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
