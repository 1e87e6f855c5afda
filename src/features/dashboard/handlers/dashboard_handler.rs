use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::dashboard::dtos::{
    DashboardRingkasanDto, TransparansiIuranDto, TransparansiQueryParams, WargaPublikDto,
};
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::{ApiResponse, Meta};
use crate::shared::validation::PERIODE_REGEX;

/// Public dashboard statistics
#[utoipa::path(
    get,
    path = "/api/dashboard/ringkasan",
    responses(
        (status = 200, description = "Dashboard statistics", body = ApiResponse<DashboardRingkasanDto>)
    ),
    tag = "dashboard"
)]
pub async fn get_ringkasan(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<DashboardRingkasanDto>>> {
    let ringkasan = service.ringkasan(Utc::now()).await?;
    Ok(Json(ApiResponse::success(Some(ringkasan), None, None)))
}

/// Public resident directory (living residents only)
#[utoipa::path(
    get,
    path = "/api/dashboard/warga",
    responses(
        (status = 200, description = "Public resident directory", body = ApiResponse<Vec<WargaPublikDto>>)
    ),
    tag = "dashboard"
)]
pub async fn get_direktori_warga(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<Vec<WargaPublikDto>>>> {
    let direktori = service.direktori_warga().await?;
    let total = direktori.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(direktori),
        None,
        Some(Meta { total }),
    )))
}

/// Public dues transparency for one billing period
#[utoipa::path(
    get,
    path = "/api/dashboard/iuran",
    params(TransparansiQueryParams),
    responses(
        (status = 200, description = "Dues transparency", body = ApiResponse<TransparansiIuranDto>)
    ),
    tag = "dashboard"
)]
pub async fn get_transparansi_iuran(
    State(service): State<Arc<DashboardService>>,
    Query(params): Query<TransparansiQueryParams>,
) -> Result<Json<ApiResponse<TransparansiIuranDto>>> {
    if let Some(periode) = &params.periode {
        if !PERIODE_REGEX.is_match(periode) {
            return Err(AppError::Validation(
                "Periode harus berformat YYYY-MM.".to_string(),
            ));
        }
    }

    let transparansi = service
        .transparansi_iuran(params.periode, Utc::now())
        .await?;
    Ok(Json(ApiResponse::success(Some(transparansi), None, None)))
}
