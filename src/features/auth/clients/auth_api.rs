use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};

/// Session tokens issued by the hosted auth service.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionTokens {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
}

/// Capability interface over the hosted session boundary. Everything the
/// application knows about sessions goes through this trait, so tests and
/// future providers can swap the implementation.
#[async_trait]
pub trait SessionGateway: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionTokens>;
    async fn sign_out(&self, access_token: &str) -> Result<()>;
}

#[derive(Debug, Serialize)]
struct PasswordGrantRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// HTTP client for the hosted auth service (password grant + sign-out).
pub struct AuthApiClient {
    http_client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl AuthApiClient {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            anon_key: config.anon_key.clone(),
        }
    }
}

#[async_trait]
impl SessionGateway for AuthApiClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<SessionTokens> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&PasswordGrantRequest { email, password })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach auth service: {}", e);
                AppError::ExternalServiceError(format!(
                    "Gagal menghubungi layanan autentikasi: {}",
                    e
                ))
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::BAD_REQUEST
            || status == reqwest::StatusCode::UNAUTHORIZED
        {
            return Err(AppError::Auth("Email atau password salah.".to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Auth service error: HTTP {} - {}", status, body);
            return Err(AppError::ExternalServiceError(format!(
                "Layanan autentikasi menolak permintaan (HTTP {}).",
                status
            )));
        }

        response.json::<SessionTokens>().await.map_err(|e| {
            tracing::error!("Failed to parse session tokens: {}", e);
            AppError::MalformedRecord(format!("session tokens: {}", e))
        })
    }

    async fn sign_out(&self, access_token: &str) -> Result<()> {
        let url = format!("{}/auth/v1/logout", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach auth service: {}", e);
                AppError::ExternalServiceError(format!(
                    "Gagal menghubungi layanan autentikasi: {}",
                    e
                ))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("Sign-out returned HTTP {}", status);
        }

        Ok(())
    }
}
