use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::config::GeminiConfig;

/// Failure modes of the narrative-summary boundary. These never propagate
/// as API errors: each maps to a distinguishable user-facing message shown
/// in place of the report.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Gemini API key is not configured")]
    MissingApiKey,

    #[error("Gemini API key was rejected")]
    InvalidApiKey,

    #[error("Gemini quota or billing limit reached")]
    QuotaExceeded,

    #[error("Gemini model not found")]
    ModelNotFound,

    #[error("Gemini returned an unexpected payload: {0}")]
    MalformedResponse(String),

    #[error("Gemini service error: {0}")]
    Service(String),
}

impl SummaryError {
    /// The Indonesian message shown to the user instead of the report.
    pub fn user_message(&self) -> String {
        match self {
            SummaryError::MissingApiKey => {
                "Fitur AI tidak aktif. Mohon konfigurasikan GEMINI_API_KEY pada server."
                    .to_string()
            }
            SummaryError::InvalidApiKey => {
                "Kunci API Gemini tidak valid. Periksa konfigurasi server.".to_string()
            }
            SummaryError::QuotaExceeded => {
                "Kuota layanan AI sudah habis. Silakan coba lagi nanti.".to_string()
            }
            SummaryError::ModelNotFound => {
                "Model AI yang dikonfigurasi tidak ditemukan. Periksa konfigurasi server."
                    .to_string()
            }
            SummaryError::MalformedResponse(_) => {
                "Layanan AI mengembalikan jawaban yang tidak dapat dibaca. Silakan coba lagi."
                    .to_string()
            }
            SummaryError::Service(_) => {
                "Terjadi kesalahan saat membuat ringkasan AI. Silakan coba lagi.".to_string()
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

fn map_error_status(status: StatusCode) -> SummaryError {
    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            SummaryError::InvalidApiKey
        }
        StatusCode::NOT_FOUND => SummaryError::ModelNotFound,
        StatusCode::TOO_MANY_REQUESTS => SummaryError::QuotaExceeded,
        other => SummaryError::Service(format!("HTTP {}", other)),
    }
}

/// Client for the Gemini `generateContent` endpoint. One fresh call per
/// invocation - no retry, no caching.
pub struct GeminiClient {
    http_client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.api_key.is_some()
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, SummaryError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(SummaryError::MissingApiKey)?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach Gemini: {}", e);
                SummaryError::Service(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: HTTP {} - {}", status, body);
            return Err(map_error_status(status));
        }

        let payload = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| SummaryError::MalformedResponse(e.to_string()))?;

        let text: String = payload
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .collect();

        if text.is_empty() {
            return Err(SummaryError::MalformedResponse(
                "no text candidates in response".to_string(),
            ));
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_statuses_map_to_distinct_failures() {
        assert!(matches!(
            map_error_status(StatusCode::UNAUTHORIZED),
            SummaryError::InvalidApiKey
        ));
        assert!(matches!(
            map_error_status(StatusCode::FORBIDDEN),
            SummaryError::InvalidApiKey
        ));
        assert!(matches!(
            map_error_status(StatusCode::NOT_FOUND),
            SummaryError::ModelNotFound
        ));
        assert!(matches!(
            map_error_status(StatusCode::TOO_MANY_REQUESTS),
            SummaryError::QuotaExceeded
        ));
        assert!(matches!(
            map_error_status(StatusCode::INTERNAL_SERVER_ERROR),
            SummaryError::Service(_)
        ));
    }

    #[test]
    fn test_user_messages_are_distinguishable() {
        let errors = [
            SummaryError::MissingApiKey,
            SummaryError::InvalidApiKey,
            SummaryError::QuotaExceeded,
            SummaryError::ModelNotFound,
            SummaryError::MalformedResponse("x".to_string()),
            SummaryError::Service("x".to_string()),
        ];

        let messages: Vec<String> = errors.iter().map(|e| e.user_message()).collect();
        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_disabled_without_api_key() {
        let client = GeminiClient::new(GeminiConfig {
            api_key: None,
            model: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        });
        assert!(!client.is_enabled());
    }

    #[test]
    fn test_response_parsing_joins_candidate_parts() {
        let json = r###"{
            "candidates": [{
                "content": {"parts": [{"text": "## Laporan"}, {"text": " Eksekutif"}]}
            }]
        }"###;

        let payload: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let text: String = payload
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .collect();

        assert_eq!(text, "## Laporan Eksekutif");
    }
}
