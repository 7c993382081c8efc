use crate::server::{
    error::AppError,
    model::{outcome::UpdateOutcome, upsell::UpsellParams},
    service::upsell::UpsellService,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;

fn params(title: &str) -> UpsellParams {
    UpsellParams {
        title: title.to_string(),
        description: "Leave at 2pm instead of 11am".to_string(),
        price: 30.0,
        time_period: "per stay".to_string(),
        availability: "on request".to_string(),
        status: 1,
    }
}
