use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::features::iuran::handlers;
use crate::features::iuran::services::IuranService;

/// Dues registry routes (mounted behind the auth middleware)
pub fn routes(service: Arc<IuranService>) -> Router {
    Router::new()
        .route("/api/iuran", get(handlers::list_iuran))
        .route("/api/iuran", post(handlers::create_iuran))
        .route("/api/iuran/{id}", put(handlers::update_iuran))
        .route("/api/iuran/{id}", delete(handlers::delete_iuran))
        .with_state(service)
}
