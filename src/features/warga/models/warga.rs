use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Sex code enum matching database enum (KTP convention: L/P)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "jenis_kelamin")]
pub enum JenisKelamin {
    L,
    P,
}

impl std::fmt::Display for JenisKelamin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JenisKelamin::L => write!(f, "L"),
            JenisKelamin::P => write!(f, "P"),
        }
    }
}

/// Database model for a resident.
///
/// Residents are never physically deleted: `status_hidup` flips to false
/// and the row stays retrievable for history while every "active"
/// aggregation and the public directory exclude it.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Warga {
    pub id: i64,
    pub keluarga_id: i64,
    pub nik: String,
    pub nama_lengkap: String,
    pub jenis_kelamin: JenisKelamin,
    pub tempat_lahir: Option<String>,
    pub tanggal_lahir: NaiveDate,
    pub agama: Option<String>,
    pub pendidikan: Option<String>,
    pub pekerjaan: String,
    pub status_perkawinan: Option<String>,
    pub status_dalam_keluarga: Option<String>,
    pub kewarganegaraan: Option<String>,
    pub email: Option<String>,
    pub telepon: Option<String>,
    pub status_hidup: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
