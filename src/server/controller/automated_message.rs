use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, StatusMessageDto},
        automated_message::{AutomatedMessageDto, AutomatedMessageRequestDto},
    },
    server::{
        error::AppError, model::automated_message::AutomatedMessageParams,
        service::automated_message::AutomatedMessageService, state::AppState,
    },
};

/// Tag for grouping automated message endpoints in OpenAPI documentation
pub static AUTOMATED_MESSAGE_TAG: &str = "automated_message";

/// Create a new automated message.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Message type and per-channel bodies
///
/// # Returns
/// - `201 Created` - The stored message
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/automated-messages",
    tag = AUTOMATED_MESSAGE_TAG,
    request_body = AutomatedMessageRequestDto,
    responses(
        (status = 201, description = "Successfully created automated message", body = AutomatedMessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_automated_message(
    State(state): State<AppState>,
    Json(payload): Json<AutomatedMessageRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let message = AutomatedMessageService::new(&state.db)
        .create(AutomatedMessageParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/automated-messages",
    tag = AUTOMATED_MESSAGE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved automated messages", body = Vec<AutomatedMessageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_automated_messages(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let messages = AutomatedMessageService::new(&state.db).get_all().await?;

    let dtos: Vec<AutomatedMessageDto> = messages.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/automated-messages/{id}",
    tag = AUTOMATED_MESSAGE_TAG,
    params(
        ("id" = i32, Path, description = "Automated message ID")
    ),
    responses(
        (status = 200, description = "Automated message or null", body = AutomatedMessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_automated_message(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let message = AutomatedMessageService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(message.map(|m| m.into_dto()))))
}

/// Update an automated message.
///
/// A missing message yields `{ status: false, message }` and nothing is written.
#[utoipa::path(
    put,
    path = "/api/automated-messages/{id}",
    tag = AUTOMATED_MESSAGE_TAG,
    params(
        ("id" = i32, Path, description = "Automated message ID")
    ),
    request_body = AutomatedMessageRequestDto,
    responses(
        (status = 200, description = "Updated automated message, or `{ status: false, message }` when missing", body = AutomatedMessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_automated_message(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AutomatedMessageRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = AutomatedMessageService::new(&state.db)
        .update(id, AutomatedMessageParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto(|m| m.into_dto()))))
}

/// Delete an automated message.
#[utoipa::path(
    delete,
    path = "/api/automated-messages/{id}",
    tag = AUTOMATED_MESSAGE_TAG,
    params(
        ("id" = i32, Path, description = "Automated message ID")
    ),
    responses(
        (status = 200, description = "Delete outcome", body = StatusMessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_automated_message(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = AutomatedMessageService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}
