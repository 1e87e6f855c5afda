use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;

/// Public dashboard routes (no authentication required)
pub fn routes(service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/dashboard/ringkasan", get(handlers::get_ringkasan))
        .route("/api/dashboard/warga", get(handlers::get_direktori_warga))
        .route(
            "/api/dashboard/iuran",
            get(handlers::get_transparansi_iuran),
        )
        .with_state(service)
}
