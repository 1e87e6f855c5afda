use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::{LoginRequestDto, LoginResponseDto, MeResponseDto};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::services::AuthService;
use crate::features::auth::view::{resolve_view, View, ViewResolution};
use crate::shared::types::ApiResponse;

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<LoginResponseDto>),
        (status = 401, description = "Wrong email or password")
    ),
    tag = "auth"
)]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<Json<ApiResponse<LoginResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = service.login(dto).await?;
    Ok(Json(ApiResponse::success(Some(response), None, None)))
}

/// Current session's pengurus profile
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user", body = ApiResponse<MeResponseDto>),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub async fn get_me(user: AuthenticatedUser) -> Result<Json<ApiResponse<MeResponseDto>>> {
    Ok(Json(ApiResponse::success(
        Some(MeResponseDto { user: user.into() }),
        None,
        None,
    )))
}

/// Sign the current session out at the hosted auth service
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Signed out"),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub async fn logout(
    State(service): State<Arc<AuthService>>,
    _user: AuthenticatedUser,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<()>>> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    service.logout(token).await?;

    Ok(Json(ApiResponse::success(
        None,
        Some("Berhasil keluar.".to_string()),
        None,
    )))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ResolveViewQuery {
    /// The view the client wants to show; defaults to the initial view
    pub view: Option<View>,
}

/// Resolve a requested view against the current session
///
/// Public endpoint with optional bearer auth: the corrective navigation
/// rules (login redirects, admin gating, the ketua-only staff page) are
/// applied server-side so every client agrees on them.
#[utoipa::path(
    get,
    path = "/api/auth/resolve-view",
    params(ResolveViewQuery),
    responses(
        (status = 200, description = "Resolved view", body = ApiResponse<ViewResolution>)
    ),
    tag = "auth"
)]
pub async fn resolve_view_handler(
    Query(query): Query<ResolveViewQuery>,
    user: Option<AuthenticatedUser>,
) -> Json<ApiResponse<ViewResolution>> {
    let requested = query.view.unwrap_or_else(View::initial);
    let resolution = resolve_view(requested, user.as_ref());
    Json(ApiResponse::success(Some(resolution), None, None))
}

#[cfg(test)]
mod tests {
    use axum::{routing::get, Router};
    use axum_test::TestServer;

    use crate::shared::test_helpers::{with_ketua_auth, with_pengurus_auth};

    fn router() -> Router {
        Router::new().route("/api/auth/resolve-view", get(super::resolve_view_handler))
    }

    #[tokio::test]
    async fn test_resolve_view_without_session_gates_admin_views() {
        let server = TestServer::new(router()).unwrap();

        let response = server.get("/api/auth/resolve-view?view=WARGA").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["view"], "LOGIN");
    }

    #[tokio::test]
    async fn test_resolve_view_pengurus_redirected_from_staff_page() {
        let server = TestServer::new(with_pengurus_auth(router())).unwrap();

        let response = server.get("/api/auth/resolve-view?view=PENGURUS").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["view"], "WARGA");
        assert!(body["data"]["notice"].is_string());
    }

    #[tokio::test]
    async fn test_resolve_view_ketua_keeps_staff_page() {
        let server = TestServer::new(with_ketua_auth(router())).unwrap();

        let response = server.get("/api/auth/resolve-view?view=PENGURUS").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["view"], "PENGURUS");
        assert!(body["data"]["notice"].is_null());
    }

    #[tokio::test]
    async fn test_resolve_view_defaults_to_public_dashboard() {
        let server = TestServer::new(router()).unwrap();

        let response = server.get("/api/auth/resolve-view").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["view"], "PUBLIC_DASHBOARD");
    }
}
