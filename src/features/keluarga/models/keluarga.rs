use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Occupancy status enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "status_hunian", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StatusHunian {
    Pemilik,
    Sewa,
    Kontrak,
}

impl std::fmt::Display for StatusHunian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusHunian::Pemilik => write!(f, "pemilik"),
            StatusHunian::Sewa => write!(f, "sewa"),
            StatusHunian::Kontrak => write!(f, "kontrak"),
        }
    }
}

/// Database model for a household (kartu keluarga).
/// `nomor_kk` is the unique business key and is immutable after creation.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Keluarga {
    pub id: i64,
    pub nomor_kk: String,
    pub kepala_keluarga: String,
    pub alamat: String,
    pub blok: String,
    pub nomor_rumah: String,
    pub rt: String,
    pub rw: String,
    pub status_hunian: StatusHunian,
    pub telepon: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
