use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, StatusMessageDto},
        upsell::{UpsellDto, UpsellRequestDto},
    },
    server::{
        error::AppError, model::upsell::UpsellParams, service::upsell::UpsellService,
        state::AppState,
    },
};

/// Tag for grouping upsell endpoints in OpenAPI documentation
pub static UPSELL_TAG: &str = "upsell";

/// Create a new upsell.
///
/// # Returns
/// - `201 Created` - The stored upsell
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/upsells",
    tag = UPSELL_TAG,
    request_body = UpsellRequestDto,
    responses(
        (status = 201, description = "Successfully created upsell", body = UpsellDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_upsell(
    State(state): State<AppState>,
    Json(payload): Json<UpsellRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let upsell = UpsellService::new(&state.db)
        .create(UpsellParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(upsell.into_dto())))
}

/// Get all upsells.
#[utoipa::path(
    get,
    path = "/api/upsells",
    tag = UPSELL_TAG,
    responses(
        (status = 200, description = "Successfully retrieved upsells", body = Vec<UpsellDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_upsells(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let upsells = UpsellService::new(&state.db).get_all().await?;

    let dtos: Vec<UpsellDto> = upsells.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get an upsell by ID, `null` if it does not exist.
#[utoipa::path(
    get,
    path = "/api/upsells/{id}",
    tag = UPSELL_TAG,
    params(
        ("id" = i32, Path, description = "Upsell ID")
    ),
    responses(
        (status = 200, description = "Upsell or null", body = UpsellDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_upsell(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let upsell = UpsellService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(upsell.map(|u| u.into_dto()))))
}

/// Update an upsell.
///
/// Overwrites every mutable field. A missing upsell yields `{ status: false, message }`
/// with HTTP 200 and nothing is written.
///
/// # Returns
/// - `200 OK` - Updated upsell or soft-failure body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/upsells/{id}",
    tag = UPSELL_TAG,
    params(
        ("id" = i32, Path, description = "Upsell ID")
    ),
    request_body = UpsellRequestDto,
    responses(
        (status = 200, description = "Updated upsell, or `{ status: false, message }` when missing", body = UpsellDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_upsell(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpsellRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = UpsellService::new(&state.db)
        .update(id, UpsellParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto(|u| u.into_dto()))))
}

/// Delete an upsell.
///
/// # Returns
/// - `200 OK` - `{ status, message }`; `status` is `false` when the upsell did not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/upsells/{id}",
    tag = UPSELL_TAG,
    params(
        ("id" = i32, Path, description = "Upsell ID")
    ),
    responses(
        (status = 200, description = "Delete outcome", body = StatusMessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_upsell(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = UpsellService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}
