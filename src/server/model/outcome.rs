//! Soft-failure outcomes for CRUD operations.
//!
//! Update and delete on upsells and automated messages never fail for a missing record.
//! They return one of these values and the caller checks the status instead.

use crate::model::api::{SoftResultDto, StatusMessageDto};

/// Result of an update-by-id operation.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome<T> {
    /// The record existed and every mutable field was overwritten.
    Updated(T),
    /// No record matched; nothing was written.
    NotFound { message: &'static str },
}

impl<T> UpdateOutcome<T> {
    /// Converts the outcome into its response body, mapping the record with `f`.
    pub fn into_dto<D>(self, f: impl FnOnce(T) -> D) -> SoftResultDto<D> {
        match self {
            Self::Updated(record) => SoftResultDto::Ok(f(record)),
            Self::NotFound { message } => SoftResultDto::Failed(StatusMessageDto {
                status: false,
                message: message.to_string(),
            }),
        }
    }
}

/// Result of a delete-by-id operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// `true` when a record was removed.
    pub status: bool,
    pub message: &'static str,
}

impl DeleteOutcome {
    pub fn deleted(message: &'static str) -> Self {
        Self {
            status: true,
            message,
        }
    }

    pub fn not_found(message: &'static str) -> Self {
        Self {
            status: false,
            message,
        }
    }

    pub fn into_dto(self) -> StatusMessageDto {
        StatusMessageDto {
            status: self.status,
            message: self.message.to_string(),
        }
    }
}
