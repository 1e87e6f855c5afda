use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::warga::models::{JenisKelamin, Warga};
use crate::shared::validation::NIK_REGEX;

/// Request DTO for creating a resident
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWargaDto {
    pub keluarga_id: i64,

    #[validate(regex(path = *NIK_REGEX, message = "NIK harus 16 digit angka."))]
    pub nik: String,

    #[validate(length(min = 1, message = "Nama lengkap wajib diisi."))]
    pub nama_lengkap: String,

    pub jenis_kelamin: JenisKelamin,

    pub tempat_lahir: Option<String>,

    /// Mandatory: drives the age-bucket statistics
    pub tanggal_lahir: NaiveDate,

    pub agama: Option<String>,
    pub pendidikan: Option<String>,

    /// Mandatory: drives the occupation statistics
    #[validate(length(min = 1, message = "Pekerjaan wajib diisi."))]
    pub pekerjaan: String,

    pub status_perkawinan: Option<String>,
    pub status_dalam_keluarga: Option<String>,
    pub kewarganegaraan: Option<String>,

    #[validate(email(message = "Format email tidak valid."))]
    pub email: Option<String>,
    pub telepon: Option<String>,

    #[serde(default = "default_status_hidup")]
    pub status_hidup: bool,
}

fn default_status_hidup() -> bool {
    true
}

/// Request DTO for updating a resident. The NIK is immutable; the liveness
/// flag is only changed through the soft-delete endpoint.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWargaDto {
    pub keluarga_id: i64,

    #[validate(length(min = 1, message = "Nama lengkap wajib diisi."))]
    pub nama_lengkap: String,

    pub jenis_kelamin: JenisKelamin,

    pub tempat_lahir: Option<String>,

    pub tanggal_lahir: NaiveDate,

    pub agama: Option<String>,
    pub pendidikan: Option<String>,

    #[validate(length(min = 1, message = "Pekerjaan wajib diisi."))]
    pub pekerjaan: String,

    pub status_perkawinan: Option<String>,
    pub status_dalam_keluarga: Option<String>,
    pub kewarganegaraan: Option<String>,

    #[validate(email(message = "Format email tidak valid."))]
    pub email: Option<String>,
    pub telepon: Option<String>,
}

/// Response DTO for a resident
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WargaResponseDto {
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

impl From<Warga> for WargaResponseDto {
    fn from(w: Warga) -> Self {
        Self {
            id: w.id,
            keluarga_id: w.keluarga_id,
            nik: w.nik,
            nama_lengkap: w.nama_lengkap,
            jenis_kelamin: w.jenis_kelamin,
            tempat_lahir: w.tempat_lahir,
            tanggal_lahir: w.tanggal_lahir,
            agama: w.agama,
            pendidikan: w.pendidikan,
            pekerjaan: w.pekerjaan,
            status_perkawinan: w.status_perkawinan,
            status_dalam_keluarga: w.status_dalam_keluarga,
            kewarganegaraan: w.kewarganegaraan,
            email: w.email,
            telepon: w.telepon,
            status_hidup: w.status_hidup,
            created_at: w.created_at,
            updated_at: w.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Warga {
        Warga {
            id: 11,
            keluarga_id: 7,
            nik: "1234567890123456".to_string(),
            nama_lengkap: "Siti Aminah".to_string(),
            jenis_kelamin: JenisKelamin::P,
            tempat_lahir: Some("Bogor".to_string()),
            tanggal_lahir: NaiveDate::from_ymd_opt(2010, 5, 1).unwrap(),
            agama: Some("Islam".to_string()),
            pendidikan: None,
            pekerjaan: "Pelajar".to_string(),
            status_perkawinan: None,
            status_dalam_keluarga: Some("Anak".to_string()),
            kewarganegaraan: Some("WNI".to_string()),
            email: None,
            telepon: None,
            status_hidup: true,
            created_at: Utc.with_ymd_and_hms(2024, 5, 30, 8, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 5, 30, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let json = serde_json::to_value(WargaResponseDto::from(sample())).unwrap();

        assert_eq!(json["keluargaId"], 7);
        assert_eq!(json["namaLengkap"], "Siti Aminah");
        assert_eq!(json["jenisKelamin"], "P");
        assert_eq!(json["tanggalLahir"], "2010-05-01");
        assert_eq!(json["statusHidup"], true);
        assert!(json.get("nama_lengkap").is_none());
        assert!(json.get("status_hidup").is_none());
    }

    #[test]
    fn test_round_trip_is_lossless() {
        let warga = sample();
        let dto = WargaResponseDto::from(warga.clone());
        let json = serde_json::to_string(&dto).unwrap();
        let back: WargaResponseDto = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, warga.id);
        assert_eq!(back.keluarga_id, warga.keluarga_id);
        assert_eq!(back.nik, warga.nik);
        assert_eq!(back.nama_lengkap, warga.nama_lengkap);
        assert_eq!(back.jenis_kelamin, warga.jenis_kelamin);
        assert_eq!(back.tempat_lahir, warga.tempat_lahir);
        assert_eq!(back.tanggal_lahir, warga.tanggal_lahir);
        assert_eq!(back.agama, warga.agama);
        assert_eq!(back.pendidikan, warga.pendidikan);
        assert_eq!(back.pekerjaan, warga.pekerjaan);
        assert_eq!(back.status_perkawinan, warga.status_perkawinan);
        assert_eq!(back.status_dalam_keluarga, warga.status_dalam_keluarga);
        assert_eq!(back.kewarganegaraan, warga.kewarganegaraan);
        assert_eq!(back.email, warga.email);
        assert_eq!(back.telepon, warga.telepon);
        assert_eq!(back.status_hidup, warga.status_hidup);
        assert_eq!(back.created_at, warga.created_at);
        assert_eq!(back.updated_at, warga.updated_at);
    }

    #[test]
    fn test_create_dto_defaults_status_hidup_to_true() {
        let json = r#"{
            "keluargaId": 7,
            "nik": "1234567890123456",
            "namaLengkap": "Siti Aminah",
            "jenisKelamin": "P",
            "tanggalLahir": "2010-05-01",
            "pekerjaan": "Pelajar"
        }"#;

        let dto: CreateWargaDto = serde_json::from_str(json).unwrap();
        assert!(dto.status_hidup);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_dto_rejects_invalid_nik() {
        let json = r#"{
            "keluargaId": 7,
            "nik": "123",
            "namaLengkap": "Siti Aminah",
            "jenisKelamin": "P",
            "tanggalLahir": "2010-05-01",
            "pekerjaan": "Pelajar"
        }"#;

        let dto: CreateWargaDto = serde_json::from_str(json).unwrap();
        assert!(dto.validate().is_err());
    }
}
