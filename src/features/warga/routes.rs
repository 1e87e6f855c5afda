use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::features::warga::handlers;
use crate::features::warga::services::WargaService;

/// Resident registry routes (mounted behind the auth middleware)
pub fn routes(service: Arc<WargaService>) -> Router {
    Router::new()
        .route("/api/warga", get(handlers::list_warga))
        .route("/api/warga", post(handlers::create_warga))
        .route("/api/warga/{id}", put(handlers::update_warga))
        .route("/api/warga/{id}", delete(handlers::delete_warga))
        .with_state(service)
}
