//! Upsell domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::upsell::{UpsellDto, UpsellRequestDto};

/// Paid extra offered to guests, such as early check-in or airport pickup.
#[derive(Debug, Clone, PartialEq)]
pub struct Upsell {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price: f64,
    /// Billing unit, e.g. `"per night"`.
    pub time_period: String,
    pub availability: String,
    pub status: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Upsell {
    pub fn from_entity(entity: entity::upsell::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            price: entity.price,
            time_period: entity.time_period,
            availability: entity.availability,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> UpsellDto {
        UpsellDto {
            id: self.id,
            title: self.title,
            description: self.description,
            price: self.price,
            time_period: self.time_period,
            availability: self.availability,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Mutable upsell fields, used for both create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsellParams {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub time_period: String,
    pub availability: String,
    pub status: i32,
}

impl From<UpsellRequestDto> for UpsellParams {
    fn from(dto: UpsellRequestDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            price: dto.price,
            time_period: dto.time_period,
            availability: dto.availability,
            status: dto.status,
        }
    }
}
