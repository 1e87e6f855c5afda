use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::guards::{RequireKetua, RequirePengurus};
use crate::features::iuran::dtos::{
    CreateIuranDto, IuranQueryParams, IuranResponseDto, UpdateIuranDto,
};
use crate::features::iuran::services::IuranService;
use crate::shared::types::{ApiResponse, Meta};
use crate::shared::validation::PERIODE_REGEX;

/// List dues records, optionally for one billing period
#[utoipa::path(
    get,
    path = "/api/iuran",
    params(IuranQueryParams),
    responses(
        (status = 200, description = "List of dues records", body = ApiResponse<Vec<IuranResponseDto>>)
    ),
    security(("bearer_auth" = [])),
    tag = "iuran"
)]
pub async fn list_iuran(
    State(service): State<Arc<IuranService>>,
    RequirePengurus(_user): RequirePengurus,
    Query(params): Query<IuranQueryParams>,
) -> Result<Json<ApiResponse<Vec<IuranResponseDto>>>> {
    if let Some(periode) = &params.periode {
        if !PERIODE_REGEX.is_match(periode) {
            return Err(AppError::Validation(
                "Periode harus berformat YYYY-MM.".to_string(),
            ));
        }
    }

    let rows = service.list(params.periode.as_deref()).await?;
    let total = rows.len() as i64;
    let items = rows.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// Create a dues record (ketua only - billing issuance is a chair decision)
#[utoipa::path(
    post,
    path = "/api/iuran",
    request_body = CreateIuranDto,
    responses(
        (status = 200, description = "Dues record created", body = ApiResponse<IuranResponseDto>),
        (status = 403, description = "Requires ketua role"),
        (status = 409, description = "Record for this household/category/period already exists")
    ),
    security(("bearer_auth" = [])),
    tag = "iuran"
)]
pub async fn create_iuran(
    State(service): State<Arc<IuranService>>,
    RequireKetua(_user): RequireKetua,
    AppJson(dto): AppJson<CreateIuranDto>,
) -> Result<Json<ApiResponse<IuranResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let iuran = service.create(dto, Utc::now()).await?;
    Ok(Json(ApiResponse::success(
        Some(iuran.into()),
        Some("Data iuran berhasil dibuat.".to_string()),
        None,
    )))
}

/// Update a dues record (payment status changes included)
#[utoipa::path(
    put,
    path = "/api/iuran/{id}",
    params(("id" = i64, Path, description = "Dues record id")),
    request_body = UpdateIuranDto,
    responses(
        (status = 200, description = "Dues record updated", body = ApiResponse<IuranResponseDto>),
        (status = 404, description = "Dues record not found")
    ),
    security(("bearer_auth" = [])),
    tag = "iuran"
)]
pub async fn update_iuran(
    State(service): State<Arc<IuranService>>,
    RequirePengurus(_user): RequirePengurus,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateIuranDto>,
) -> Result<Json<ApiResponse<IuranResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let iuran = service.update(id, dto, Utc::now()).await?;
    Ok(Json(ApiResponse::success(
        Some(iuran.into()),
        Some("Data iuran berhasil diperbarui.".to_string()),
        None,
    )))
}

/// Delete a dues record (ketua only)
#[utoipa::path(
    delete,
    path = "/api/iuran/{id}",
    params(("id" = i64, Path, description = "Dues record id")),
    responses(
        (status = 200, description = "Dues record deleted"),
        (status = 403, description = "Requires ketua role"),
        (status = 404, description = "Dues record not found")
    ),
    security(("bearer_auth" = [])),
    tag = "iuran"
)]
pub async fn delete_iuran(
    State(service): State<Arc<IuranService>>,
    RequireKetua(_user): RequireKetua,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Data iuran berhasil dihapus.".to_string()),
        None,
    )))
}
