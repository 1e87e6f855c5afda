use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;

use crate::core::error::Result;
use crate::features::dashboard::dtos::RingkasanAiDto;
use crate::features::summary::services::SummaryService;
use crate::shared::types::ApiResponse;

/// Generate the AI executive report for the dashboard
///
/// Always returns text: either the generated markdown or a message
/// explaining why the report could not be produced.
#[utoipa::path(
    post,
    path = "/api/dashboard/ringkasan-ai",
    responses(
        (status = 200, description = "Generated report or fallback message", body = ApiResponse<RingkasanAiDto>)
    ),
    tag = "dashboard"
)]
pub async fn generate_ringkasan_ai(
    State(service): State<Arc<SummaryService>>,
) -> Result<Json<ApiResponse<RingkasanAiDto>>> {
    let ringkasan = service.buat_ringkasan(Utc::now()).await?;
    Ok(Json(ApiResponse::success(
        Some(RingkasanAiDto { ringkasan }),
        None,
        None,
    )))
}
