//! API data transfer objects.
//!
//! These types define the JSON request and response bodies exchanged with clients. Field
//! names are serialized in camelCase to stay compatible with the existing frontend.

pub mod api;
pub mod automated_message;
pub mod listing;
pub mod upsell;
