use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Dues category enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "jenis_iuran", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum JenisIuran {
    Keamanan,
    Kebersihan,
    Sosial,
}

impl std::fmt::Display for JenisIuran {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JenisIuran::Keamanan => write!(f, "keamanan"),
            JenisIuran::Kebersihan => write!(f, "kebersihan"),
            JenisIuran::Sosial => write!(f, "sosial"),
        }
    }
}

/// Database model for a monthly dues record.
///
/// One record per household, category, and `YYYY-MM` period (enforced by a
/// unique index). `tanggal_bayar` is set only while `status_bayar` is true.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Iuran {
    pub id: i64,
    pub keluarga_id: i64,
    pub jenis_iuran: JenisIuran,
    pub periode: String,
    pub jumlah: i64,
    pub status_bayar: bool,
    pub tanggal_bayar: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
