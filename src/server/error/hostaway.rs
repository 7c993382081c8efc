use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures caused by data or responses coming from the HostAway API.
#[derive(Error, Debug)]
pub enum HostawayError {
    /// HostAway answered with a non-success HTTP status.
    #[error("HostAway request to {endpoint} failed with status {status}")]
    HttpStatus {
        /// Endpoint path that was requested
        endpoint: String,
        /// HTTP status code returned
        status: u16,
    },

    /// HostAway answered 200 but the envelope status was not `success`.
    #[error("HostAway returned status '{0}'")]
    Unsuccessful(String),

    /// A listing in the remote payload has no `id`.
    ///
    /// Remote ids are reused as the local lookup key, so the batch cannot be imported.
    #[error("HostAway listing at position {position} has no id")]
    MissingListingId {
        /// Zero-based position of the listing in the remote payload
        position: usize,
    },
}

/// Converts HostAway errors into HTTP responses.
///
/// Every variant is an upstream data problem and maps to 502 Bad Gateway. The listing
/// import has already logged the failure at error level, so the client only receives a
/// generic description.
impl IntoResponse for HostawayError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: "Listing provider returned invalid data".to_string(),
            }),
        )
            .into_response()
    }
}
