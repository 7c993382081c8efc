//! HTTP request handlers.
//!
//! Controllers convert request DTOs into service parameters, call the service layer and
//! turn domain models back into response DTOs. Every handler carries a `utoipa::path`
//! annotation so it appears in the generated OpenAPI document.

pub mod automated_message;
pub mod listing;
pub mod upsell;
