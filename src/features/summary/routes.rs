use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::summary::handlers;
use crate::features::summary::services::SummaryService;

/// Public AI-report route (triggered from the public dashboard)
pub fn routes(service: Arc<SummaryService>) -> Router {
    Router::new()
        .route(
            "/api/dashboard/ringkasan-ai",
            post(handlers::generate_ringkasan_ai),
        )
        .with_state(service)
}
