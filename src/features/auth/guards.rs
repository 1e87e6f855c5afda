//! Role-based authorization guards.
//!
//! These guards extract the authenticated user and verify they have the
//! required role.
//!
//! Role hierarchy (from highest to lowest):
//! - ketua: full administrative access, including deletes and pengurus
//!   management
//! - pengurus: day-to-day administration (no deletes, no iuran creation,
//!   no pengurus management)

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Guard for ketua-only operations.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireKetua(user): RequireKetua) { ... }
/// ```
pub struct RequireKetua(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireKetua
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))?;

        if !user.is_ketua() {
            return Err(AppError::Forbidden(
                "Hanya ketua yang dapat melakukan aksi ini.".to_string(),
            ));
        }

        Ok(RequireKetua(user.clone()))
    }
}

/// Guard for operations any authenticated pengurus (including the ketua)
/// may perform.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequirePengurus(user): RequirePengurus) { ... }
/// ```
pub struct RequirePengurus(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequirePengurus
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))?;

        Ok(RequirePengurus(user.clone()))
    }
}
