#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;
#[cfg(test)]
use crate::features::pengurus::models::UserRole;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
#[allow(dead_code)]
pub fn create_ketua_user() -> AuthenticatedUser {
    AuthenticatedUser {
        profile_id: 1,
        auth_uid: "test-auth-uid-ketua".to_string(),
        email: "ketua@beryl.test".to_string(),
        nama_lengkap: "Ketua Paguyuban".to_string(),
        role: UserRole::Ketua,
    }
}

#[cfg(test)]
#[allow(dead_code)]
pub fn create_pengurus_user() -> AuthenticatedUser {
    AuthenticatedUser {
        profile_id: 2,
        auth_uid: "test-auth-uid-pengurus".to_string(),
        email: "pengurus@beryl.test".to_string(),
        nama_lengkap: "Pengurus Harian".to_string(),
        role: UserRole::Pengurus,
    }
}

#[cfg(test)]
#[allow(dead_code)]
async fn inject_ketua_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_ketua_user());
    next.run(request).await
}

#[cfg(test)]
#[allow(dead_code)]
async fn inject_pengurus_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_pengurus_user());
    next.run(request).await
}

#[cfg(test)]
#[allow(dead_code)]
pub fn with_ketua_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_ketua_middleware))
}

#[cfg(test)]
#[allow(dead_code)]
pub fn with_pengurus_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_pengurus_middleware))
}
