use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::iuran::models::{Iuran, JenisIuran};
use crate::shared::validation::PERIODE_REGEX;

/// Request DTO for creating a dues record
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateIuranDto {
    pub keluarga_id: i64,

    pub jenis_iuran: JenisIuran,

    #[validate(regex(path = *PERIODE_REGEX, message = "Periode harus berformat YYYY-MM."))]
    pub periode: String,

    #[validate(range(min = 0, message = "Jumlah iuran tidak boleh negatif."))]
    pub jumlah: i64,

    #[serde(default)]
    pub status_bayar: bool,

    /// Optional; when the record is created as paid and this is absent the
    /// service stamps the current time.
    pub tanggal_bayar: Option<DateTime<Utc>>,
}

/// Request DTO for updating a dues record
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIuranDto {
    pub keluarga_id: i64,

    pub jenis_iuran: JenisIuran,

    #[validate(regex(path = *PERIODE_REGEX, message = "Periode harus berformat YYYY-MM."))]
    pub periode: String,

    #[validate(range(min = 0, message = "Jumlah iuran tidak boleh negatif."))]
    pub jumlah: i64,

    pub status_bayar: bool,

    pub tanggal_bayar: Option<DateTime<Utc>>,
}

/// Query parameters for listing dues records
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct IuranQueryParams {
    /// Restrict to one `YYYY-MM` billing period
    pub periode: Option<String>,
}

/// Response DTO for a dues record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IuranResponseDto {
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

impl From<Iuran> for IuranResponseDto {
    fn from(i: Iuran) -> Self {
        Self {
            id: i.id,
            keluarga_id: i.keluarga_id,
            jenis_iuran: i.jenis_iuran,
            periode: i.periode,
            jumlah: i.jumlah,
            status_bayar: i.status_bayar,
            tanggal_bayar: i.tanggal_bayar,
            created_at: i.created_at,
            updated_at: i.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Iuran {
        Iuran {
            id: 3,
            keluarga_id: 7,
            jenis_iuran: JenisIuran::Keamanan,
            periode: "2024-06".to_string(),
            jumlah: 150_000,
            status_bayar: true,
            tanggal_bayar: Some(Utc.with_ymd_and_hms(2024, 6, 5, 10, 30, 0).unwrap()),
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 6, 5, 10, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let json = serde_json::to_value(IuranResponseDto::from(sample())).unwrap();

        assert_eq!(json["keluargaId"], 7);
        assert_eq!(json["jenisIuran"], "keamanan");
        assert_eq!(json["statusBayar"], true);
        assert!(json["tanggalBayar"].is_string());
        assert!(json.get("status_bayar").is_none());
    }

    #[test]
    fn test_round_trip_is_lossless() {
        let iuran = sample();
        let dto = IuranResponseDto::from(iuran.clone());
        let json = serde_json::to_string(&dto).unwrap();
        let back: IuranResponseDto = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, iuran.id);
        assert_eq!(back.keluarga_id, iuran.keluarga_id);
        assert_eq!(back.jenis_iuran, iuran.jenis_iuran);
        assert_eq!(back.periode, iuran.periode);
        assert_eq!(back.jumlah, iuran.jumlah);
        assert_eq!(back.status_bayar, iuran.status_bayar);
        assert_eq!(back.tanggal_bayar, iuran.tanggal_bayar);
        assert_eq!(back.created_at, iuran.created_at);
        assert_eq!(back.updated_at, iuran.updated_at);
    }

    #[test]
    fn test_create_dto_rejects_bad_periode_and_negative_amount() {
        let dto = CreateIuranDto {
            keluarga_id: 7,
            jenis_iuran: JenisIuran::Sosial,
            periode: "2024-6".to_string(),
            jumlah: 50_000,
            status_bayar: false,
            tanggal_bayar: None,
        };
        assert!(dto.validate().is_err());

        let dto = CreateIuranDto {
            periode: "2024-06".to_string(),
            jumlah: -1,
            ..dto
        };
        assert!(dto.validate().is_err());
    }
}
