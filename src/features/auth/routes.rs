use crate::core::middleware;
use crate::features::auth::handlers;
use crate::features::auth::services::AuthService;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Public auth routes (no authentication required)
pub fn public_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/auth/login", post(handlers::login))
        .with_state(Arc::clone(&service))
        .merge(
            // View resolution is public but reads the session when present
            Router::new()
                .route(
                    "/api/auth/resolve-view",
                    get(handlers::resolve_view_handler),
                )
                .layer(axum::middleware::from_fn_with_state(
                    service,
                    middleware::optional_auth_middleware,
                )),
        )
}

/// Protected auth routes (require a valid session)
pub fn protected_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/auth/me", get(handlers::get_me))
        .route("/api/auth/logout", post(handlers::logout))
        .with_state(service)
}
