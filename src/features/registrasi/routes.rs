use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::registrasi::handlers;
use crate::features::registrasi::services::RegistrasiService;

/// Public registration route (no authentication required)
pub fn routes(service: Arc<RegistrasiService>) -> Router {
    Router::new()
        .route("/api/registrasi", post(handlers::register))
        .with_state(service)
}
