use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Outcome object returned instead of an error when a record does not exist.
///
/// Clients must inspect `status` to distinguish success from not-found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusMessageDto {
    pub status: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SuccessMessageDto {
    pub success: bool,
    pub message: String,
}

/// Either the updated record or a soft failure describing why nothing was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SoftResultDto<T> {
    Ok(T),
    Failed(StatusMessageDto),
}
