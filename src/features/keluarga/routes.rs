use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::features::keluarga::handlers;
use crate::features::keluarga::services::KeluargaService;

/// Household registry routes (mounted behind the auth middleware)
pub fn routes(service: Arc<KeluargaService>) -> Router {
    Router::new()
        .route("/api/keluarga", get(handlers::list_keluarga))
        .route("/api/keluarga", post(handlers::create_keluarga))
        .route("/api/keluarga/{id}", put(handlers::update_keluarga))
        .route("/api/keluarga/{id}", delete(handlers::delete_keluarga))
        .with_state(service)
}
