use crate::server::{
    data::automated_message::AutomatedMessageRepository,
    model::automated_message::AutomatedMessageParams,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;

fn params(message_type: &str) -> AutomatedMessageParams {
    AutomatedMessageParams {
        message_type: message_type.to_string(),
        sms_message: "Your door code is ready".to_string(),
        email_message: "<p>Your door code is ready</p>".to_string(),
        air_bnb_message: "Door code inside the app".to_string(),
    }
}
