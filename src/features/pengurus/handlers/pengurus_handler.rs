use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireKetua;
use crate::features::pengurus::dtos::{CreatePengurusDto, PengurusResponseDto};
use crate::features::pengurus::services::PengurusService;
use crate::shared::types::{ApiResponse, Meta};

/// List pengurus accounts (ketua only)
#[utoipa::path(
    get,
    path = "/api/pengurus",
    responses(
        (status = 200, description = "List of pengurus accounts", body = ApiResponse<Vec<PengurusResponseDto>>),
        (status = 403, description = "Requires ketua role")
    ),
    security(("bearer_auth" = [])),
    tag = "pengurus"
)]
pub async fn list_pengurus(
    State(service): State<Arc<PengurusService>>,
    RequireKetua(_user): RequireKetua,
) -> Result<Json<ApiResponse<Vec<PengurusResponseDto>>>> {
    let profiles = service.list().await?;
    let total = profiles.len() as i64;
    let items = profiles.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// Create a pengurus account (ketua only)
#[utoipa::path(
    post,
    path = "/api/pengurus",
    request_body = CreatePengurusDto,
    responses(
        (status = 200, description = "Pengurus created", body = ApiResponse<PengurusResponseDto>),
        (status = 403, description = "Requires ketua role"),
        (status = 409, description = "Email already registered")
    ),
    security(("bearer_auth" = [])),
    tag = "pengurus"
)]
pub async fn create_pengurus(
    State(service): State<Arc<PengurusService>>,
    RequireKetua(_user): RequireKetua,
    AppJson(dto): AppJson<CreatePengurusDto>,
) -> Result<Json<ApiResponse<PengurusResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let profile = service.create(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(profile.into()),
        Some("Pengurus baru berhasil ditambahkan.".to_string()),
        None,
    )))
}
