use std::sync::Arc;

use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::auth::clients::SessionGateway;
use crate::features::auth::dtos::{LoginRequestDto, LoginResponseDto};
use crate::features::auth::jwt::JwtValidator;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::view::{resolve_view, View};
use crate::features::pengurus::models::Profile;

/// Session gate: logs in against the hosted auth service, validates bearer
/// tokens locally, and resolves the pengurus profile behind a session.
pub struct AuthService {
    pool: PgPool,
    gateway: Arc<dyn SessionGateway>,
    validator: JwtValidator,
}

impl AuthService {
    pub fn new(pool: PgPool, gateway: Arc<dyn SessionGateway>, validator: JwtValidator) -> Self {
        Self {
            pool,
            gateway,
            validator,
        }
    }

    /// Validate a bearer token and load the pengurus profile it belongs to.
    pub async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser> {
        let claims = self.validator.validate(token)?;

        let profile = self
            .find_profile(&claims.sub)
            .await?
            .ok_or_else(|| {
                AppError::Unauthorized("Profil pengurus tidak ditemukan untuk sesi ini.".to_string())
            })?;

        Ok(profile.into())
    }

    pub async fn login(&self, dto: LoginRequestDto) -> Result<LoginResponseDto> {
        let tokens = self.gateway.sign_in(&dto.email, &dto.password).await?;
        let user = self.authenticate(&tokens.access_token).await?;

        tracing::info!("Login: profile_id={}, role={}", user.profile_id, user.role);

        let resolution = resolve_view(View::Login, Some(&user));

        Ok(LoginResponseDto {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires_in: tokens.expires_in,
            user: user.into(),
            redirect_view: resolution.view,
        })
    }

    pub async fn logout(&self, token: &str) -> Result<()> {
        self.gateway.sign_out(token).await
    }

    async fn find_profile(&self, auth_uid: &str) -> Result<Option<Profile>> {
        sqlx::query_as::<_, Profile>(
            "SELECT id, auth_uid, email, nama_lengkap, role, created_at, updated_at
             FROM profiles
             WHERE auth_uid = $1",
        )
        .bind(auth_uid)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch profile: {:?}", e);
            AppError::remote_op("Gagal mengambil profil pengurus.", e)
        })
    }
}
