use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::registrasi::dtos::{RegistrasiDto, RegistrasiResponseDto};
use crate::features::registrasi::services::RegistrasiService;
use crate::shared::types::ApiResponse;

/// Self-service registration of a household and its members
///
/// Public endpoint: new residents register themselves; the data lands in
/// the same registries the admin area manages.
#[utoipa::path(
    post,
    path = "/api/registrasi",
    request_body = RegistrasiDto,
    responses(
        (status = 200, description = "Registration stored", body = ApiResponse<RegistrasiResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Nomor KK or NIK already registered")
    ),
    tag = "registrasi"
)]
pub async fn register(
    State(service): State<Arc<RegistrasiService>>,
    AppJson(dto): AppJson<RegistrasiDto>,
) -> Result<Json<ApiResponse<RegistrasiResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = service.register(dto).await?;
    Ok(Json(ApiResponse::success(
        Some(response),
        Some("Pendaftaran berhasil! Selamat datang di Cluster Beryl.".to_string()),
        None,
    )))
}
