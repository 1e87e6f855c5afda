use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::pengurus::handlers;
use crate::features::pengurus::services::PengurusService;

/// Pengurus management routes. Mounted behind the auth middleware; the
/// ketua-only restriction is enforced by the handler guards.
pub fn routes(service: Arc<PengurusService>) -> Router {
    Router::new()
        .route("/api/pengurus", get(handlers::list_pengurus))
        .route("/api/pengurus", post(handlers::create_pengurus))
        .with_state(service)
}
