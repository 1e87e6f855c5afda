use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::{RequireKetua, RequirePengurus};
use crate::features::keluarga::dtos::{CreateKeluargaDto, KeluargaResponseDto, UpdateKeluargaDto};
use crate::features::keluarga::services::KeluargaService;
use crate::shared::types::{ApiResponse, Meta};

/// List all households
#[utoipa::path(
    get,
    path = "/api/keluarga",
    responses(
        (status = 200, description = "List of households", body = ApiResponse<Vec<KeluargaResponseDto>>)
    ),
    security(("bearer_auth" = [])),
    tag = "keluarga"
)]
pub async fn list_keluarga(
    State(service): State<Arc<KeluargaService>>,
    RequirePengurus(_user): RequirePengurus,
) -> Result<Json<ApiResponse<Vec<KeluargaResponseDto>>>> {
    let rows = service.list().await?;
    let total = rows.len() as i64;
    let items = rows.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// Create a household
#[utoipa::path(
    post,
    path = "/api/keluarga",
    request_body = CreateKeluargaDto,
    responses(
        (status = 200, description = "Household created", body = ApiResponse<KeluargaResponseDto>),
        (status = 409, description = "Nomor KK already registered")
    ),
    security(("bearer_auth" = [])),
    tag = "keluarga"
)]
pub async fn create_keluarga(
    State(service): State<Arc<KeluargaService>>,
    RequirePengurus(_user): RequirePengurus,
    AppJson(dto): AppJson<CreateKeluargaDto>,
) -> Result<Json<ApiResponse<KeluargaResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let keluarga = service.create(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(keluarga.into()),
        Some("Data keluarga berhasil dibuat.".to_string()),
        None,
    )))
}

/// Update a household (the registration number is immutable)
#[utoipa::path(
    put,
    path = "/api/keluarga/{id}",
    params(("id" = i64, Path, description = "Household id")),
    request_body = UpdateKeluargaDto,
    responses(
        (status = 200, description = "Household updated", body = ApiResponse<KeluargaResponseDto>),
        (status = 404, description = "Household not found")
    ),
    security(("bearer_auth" = [])),
    tag = "keluarga"
)]
pub async fn update_keluarga(
    State(service): State<Arc<KeluargaService>>,
    RequirePengurus(_user): RequirePengurus,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateKeluargaDto>,
) -> Result<Json<ApiResponse<KeluargaResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let keluarga = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(keluarga.into()),
        Some("Data keluarga berhasil diperbarui.".to_string()),
        None,
    )))
}

/// Delete a household (ketua only; refused while warga/iuran reference it)
#[utoipa::path(
    delete,
    path = "/api/keluarga/{id}",
    params(("id" = i64, Path, description = "Household id")),
    responses(
        (status = 200, description = "Household deleted"),
        (status = 403, description = "Requires ketua role"),
        (status = 409, description = "Household still has dependent records")
    ),
    security(("bearer_auth" = [])),
    tag = "keluarga"
)]
pub async fn delete_keluarga(
    State(service): State<Arc<KeluargaService>>,
    RequireKetua(_user): RequireKetua,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Data keluarga berhasil dihapus.".to_string()),
        None,
    )))
}
