use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::{RequireKetua, RequirePengurus};
use crate::features::warga::dtos::{CreateWargaDto, UpdateWargaDto, WargaResponseDto};
use crate::features::warga::services::WargaService;
use crate::shared::types::{ApiResponse, Meta};

/// List all residents (including soft-deleted, for history)
#[utoipa::path(
    get,
    path = "/api/warga",
    responses(
        (status = 200, description = "List of residents", body = ApiResponse<Vec<WargaResponseDto>>)
    ),
    security(("bearer_auth" = [])),
    tag = "warga"
)]
pub async fn list_warga(
    State(service): State<Arc<WargaService>>,
    RequirePengurus(_user): RequirePengurus,
) -> Result<Json<ApiResponse<Vec<WargaResponseDto>>>> {
    let rows = service.list().await?;
    let total = rows.len() as i64;
    let items = rows.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// Create a resident
#[utoipa::path(
    post,
    path = "/api/warga",
    request_body = CreateWargaDto,
    responses(
        (status = 200, description = "Resident created", body = ApiResponse<WargaResponseDto>),
        (status = 409, description = "NIK already registered")
    ),
    security(("bearer_auth" = [])),
    tag = "warga"
)]
pub async fn create_warga(
    State(service): State<Arc<WargaService>>,
    RequirePengurus(_user): RequirePengurus,
    AppJson(dto): AppJson<CreateWargaDto>,
) -> Result<Json<ApiResponse<WargaResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let warga = service.create(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(warga.into()),
        Some("Data warga berhasil dibuat.".to_string()),
        None,
    )))
}

/// Update a resident
#[utoipa::path(
    put,
    path = "/api/warga/{id}",
    params(("id" = i64, Path, description = "Resident id")),
    request_body = UpdateWargaDto,
    responses(
        (status = 200, description = "Resident updated", body = ApiResponse<WargaResponseDto>),
        (status = 404, description = "Resident not found")
    ),
    security(("bearer_auth" = [])),
    tag = "warga"
)]
pub async fn update_warga(
    State(service): State<Arc<WargaService>>,
    RequirePengurus(_user): RequirePengurus,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateWargaDto>,
) -> Result<Json<ApiResponse<WargaResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let warga = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(warga.into()),
        Some("Data warga berhasil diperbarui.".to_string()),
        None,
    )))
}

/// Soft-delete a resident (ketua only)
#[utoipa::path(
    delete,
    path = "/api/warga/{id}",
    params(("id" = i64, Path, description = "Resident id")),
    responses(
        (status = 200, description = "Resident marked deceased/removed"),
        (status = 403, description = "Requires ketua role"),
        (status = 404, description = "Resident not found")
    ),
    security(("bearer_auth" = [])),
    tag = "warga"
)]
pub async fn delete_warga(
    State(service): State<Arc<WargaService>>,
    RequireKetua(_user): RequireKetua,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.soft_delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Data warga berhasil dihapus.".to_string()),
        None,
    )))
}
