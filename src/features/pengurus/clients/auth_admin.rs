use serde::{Deserialize, Serialize};

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};

/// Request body for the privileged user-creation endpoint
#[derive(Debug, Serialize)]
struct CreateAuthUserRequest<'a> {
    email: &'a str,
    password: &'a str,
    email_confirm: bool,
}

/// The subset of the auth-admin response this service needs
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedAuthUser {
    pub id: String,
}

/// Client for the hosted auth service's admin API.
///
/// Account creation requires the service-role credential, which only this
/// process holds. Without it the client refuses with a clear error instead
/// of failing at the remote.
pub struct AuthAdminClient {
    http_client: reqwest::Client,
    base_url: String,
    service_role_key: Option<String>,
}

impl AuthAdminClient {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            service_role_key: config.service_role_key.clone(),
        }
    }

    /// Create a login account at the hosted auth service.
    pub async fn create_user(&self, email: &str, password: &str) -> Result<CreatedAuthUser> {
        let key = self.service_role_key.as_deref().ok_or_else(|| {
            AppError::ExternalServiceError(
                "Pembuatan akun pengurus tidak aktif: kredensial layanan autentikasi belum dikonfigurasi.".to_string(),
            )
        })?;

        let url = format!("{}/auth/v1/admin/users", self.base_url);

        tracing::debug!("Creating auth user at {}", url);

        let response = self
            .http_client
            .post(&url)
            .header("apikey", key)
            .bearer_auth(key)
            .json(&CreateAuthUserRequest {
                email,
                password,
                email_confirm: true,
            })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach auth admin endpoint: {}", e);
                AppError::ExternalServiceError(format!(
                    "Gagal menghubungi layanan autentikasi: {}",
                    e
                ))
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::CONFLICT
            || status == reqwest::StatusCode::UNPROCESSABLE_ENTITY
        {
            return Err(AppError::Conflict(
                "Email sudah terdaftar, gunakan email lain.".to_string(),
            ));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Auth admin API error: HTTP {} - {}", status, body);
            return Err(AppError::ExternalServiceError(format!(
                "Layanan autentikasi menolak permintaan (HTTP {}).",
                status
            )));
        }

        response.json::<CreatedAuthUser>().await.map_err(|e| {
            tracing::error!("Failed to parse auth admin response: {}", e);
            AppError::MalformedRecord(format!("auth admin response: {}", e))
        })
    }
}
