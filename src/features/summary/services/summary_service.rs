use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use minijinja::Value;

use crate::core::error::{AppError, Result};
use crate::features::dashboard::services::statistics::periode_berjalan;
use crate::features::iuran::dtos::IuranResponseDto;
use crate::features::iuran::IuranService;
use crate::features::keluarga::dtos::KeluargaResponseDto;
use crate::features::keluarga::KeluargaService;
use crate::features::summary::client::GeminiClient;
use crate::features::warga::dtos::WargaResponseDto;
use crate::features::warga::WargaService;
use crate::shared::prompts::render_template;

const PROMPT_TEMPLATE: &str = "summary/laporan_paguyuban.jinja";

/// Compose the executive-report prompt from the JSON-serialized lists.
fn susun_prompt(
    data_warga: &str,
    data_keluarga: &str,
    data_iuran: &str,
    periode: &str,
) -> Result<String> {
    let mut ctx = HashMap::new();
    ctx.insert("data_warga", Value::from(data_warga));
    ctx.insert("data_keluarga", Value::from(data_keluarga));
    ctx.insert("data_iuran", Value::from(data_iuran));
    ctx.insert("periode", Value::from(periode));

    render_template(PROMPT_TEMPLATE, &ctx)
        .map_err(|e| AppError::Internal(format!("Failed to render summary prompt: {}", e)))
}

/// Narrative-summary service: serializes the current lists into the fixed
/// report prompt and forwards it to Gemini. Generation failures resolve to
/// a user-facing string, never an error.
pub struct SummaryService {
    warga_service: Arc<WargaService>,
    keluarga_service: Arc<KeluargaService>,
    iuran_service: Arc<IuranService>,
    client: Arc<GeminiClient>,
}

impl SummaryService {
    pub fn new(
        warga_service: Arc<WargaService>,
        keluarga_service: Arc<KeluargaService>,
        iuran_service: Arc<IuranService>,
        client: Arc<GeminiClient>,
    ) -> Self {
        Self {
            warga_service,
            keluarga_service,
            iuran_service,
            client,
        }
    }

    /// Build and run the report for the current billing period. Only a
    /// failed data fetch is an error; every Gemini failure becomes the
    /// returned text.
    pub async fn buat_ringkasan(&self, now: DateTime<Utc>) -> Result<String> {
        let (warga, keluarga, iuran) = tokio::try_join!(
            self.warga_service.list(),
            self.keluarga_service.list(),
            self.iuran_service.list(None),
        )?;

        let periode = periode_berjalan(now);

        // the prompt embeds the application-side (camelCase) representation
        let warga_aktif: Vec<WargaResponseDto> = warga
            .into_iter()
            .filter(|w| w.status_hidup)
            .map(Into::into)
            .collect();
        let semua_keluarga: Vec<KeluargaResponseDto> =
            keluarga.into_iter().map(Into::into).collect();
        let iuran_periode: Vec<IuranResponseDto> = iuran
            .into_iter()
            .filter(|i| i.periode == periode)
            .map(Into::into)
            .collect();

        let prompt = susun_prompt(
            &to_pretty_json(&warga_aktif)?,
            &to_pretty_json(&semua_keluarga)?,
            &to_pretty_json(&iuran_periode)?,
            &periode,
        )?;

        match self.client.generate(&prompt).await {
            Ok(text) => Ok(text),
            Err(e) => {
                tracing::warn!("Summary generation failed: {}", e);
                Ok(e.user_message())
            }
        }
    }
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Internal(format!("Failed to serialize report data: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_data_and_sections() {
        let prompt = susun_prompt(
            r#"[{"namaLengkap":"Budi"}]"#,
            r#"[{"kepalaKeluarga":"Budi"}]"#,
            "[]",
            "2024-06",
        )
        .unwrap();

        assert!(prompt.contains(r#"[{"namaLengkap":"Budi"}]"#));
        assert!(prompt.contains("Periode 2024-06"));
        assert!(prompt.contains("### Ringkasan Umum"));
        assert!(prompt.contains("### Analisis Demografi"));
        assert!(prompt.contains("### Status Keuangan"));
        assert!(prompt.contains("### Kesimpulan"));
    }
}
