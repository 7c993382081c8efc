use crate::server::{data::upsell::UpsellRepository, model::upsell::UpsellParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;

fn params(title: &str) -> UpsellParams {
    UpsellParams {
        title: title.to_string(),
        description: "Arrive from noon instead of 4pm".to_string(),
        price: 40.0,
        time_period: "per stay".to_string(),
        availability: "weekdays".to_string(),
        status: 1,
    }
}
