use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::keluarga::models::{Keluarga, StatusHunian};
use crate::shared::validation::{NIK_REGEX, RT_RW_REGEX};

/// Request DTO for registering a household.
/// `nomorKK` is the unique business key; it cannot be changed later.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateKeluargaDto {
    #[serde(rename = "nomorKK")]
    #[validate(regex(path = *NIK_REGEX, message = "Nomor KK harus 16 digit angka."))]
    pub nomor_kk: String,

    #[validate(length(min = 1, message = "Nama kepala keluarga wajib diisi."))]
    pub kepala_keluarga: String,

    #[validate(length(min = 1, message = "Alamat wajib diisi."))]
    pub alamat: String,

    #[validate(length(min = 1, message = "Blok wajib diisi."))]
    pub blok: String,

    #[validate(length(min = 1, message = "Nomor rumah wajib diisi."))]
    pub nomor_rumah: String,

    #[validate(regex(path = *RT_RW_REGEX, message = "RT harus berupa angka."))]
    pub rt: String,

    #[validate(regex(path = *RT_RW_REGEX, message = "RW harus berupa angka."))]
    pub rw: String,

    pub status_hunian: StatusHunian,

    pub telepon: Option<String>,
}

/// Request DTO for updating a household. The registration number is
/// immutable and therefore absent here.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateKeluargaDto {
    #[validate(length(min = 1, message = "Nama kepala keluarga wajib diisi."))]
    pub kepala_keluarga: String,

    #[validate(length(min = 1, message = "Alamat wajib diisi."))]
    pub alamat: String,

    #[validate(length(min = 1, message = "Blok wajib diisi."))]
    pub blok: String,

    #[validate(length(min = 1, message = "Nomor rumah wajib diisi."))]
    pub nomor_rumah: String,

    #[validate(regex(path = *RT_RW_REGEX, message = "RT harus berupa angka."))]
    pub rt: String,

    #[validate(regex(path = *RT_RW_REGEX, message = "RW harus berupa angka."))]
    pub rw: String,

    pub status_hunian: StatusHunian,

    pub telepon: Option<String>,
}

/// Response DTO for a household
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeluargaResponseDto {
    pub id: i64,
    #[serde(rename = "nomorKK")]
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

impl From<Keluarga> for KeluargaResponseDto {
    fn from(k: Keluarga) -> Self {
        Self {
            id: k.id,
            nomor_kk: k.nomor_kk,
            kepala_keluarga: k.kepala_keluarga,
            alamat: k.alamat,
            blok: k.blok,
            nomor_rumah: k.nomor_rumah,
            rt: k.rt,
            rw: k.rw,
            status_hunian: k.status_hunian,
            telepon: k.telepon,
            created_at: k.created_at,
            updated_at: k.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Keluarga {
        Keluarga {
            id: 7,
            nomor_kk: "3201012501990001".to_string(),
            kepala_keluarga: "Budi".to_string(),
            alamat: "Jl. Beryl Raya".to_string(),
            blok: "C".to_string(),
            nomor_rumah: "12".to_string(),
            rt: "03".to_string(),
            rw: "07".to_string(),
            status_hunian: StatusHunian::Pemilik,
            telepon: Some("081234567890".to_string()),
            created_at: Utc.with_ymd_and_hms(2024, 5, 30, 8, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 5, 30, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let json = serde_json::to_value(KeluargaResponseDto::from(sample())).unwrap();

        assert_eq!(json["nomorKK"], "3201012501990001");
        assert_eq!(json["kepalaKeluarga"], "Budi");
        assert_eq!(json["nomorRumah"], "12");
        assert_eq!(json["statusHunian"], "pemilik");
        assert!(json.get("nomor_kk").is_none());
        assert!(json.get("kepala_keluarga").is_none());
    }

    // The model -> DTO -> JSON -> DTO chain must preserve every declared
    // field, so the storage and application representations stay a lossless
    // bijection.
    #[test]
    fn test_round_trip_is_lossless() {
        let keluarga = sample();
        let dto = KeluargaResponseDto::from(keluarga.clone());
        let json = serde_json::to_string(&dto).unwrap();
        let back: KeluargaResponseDto = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, keluarga.id);
        assert_eq!(back.nomor_kk, keluarga.nomor_kk);
        assert_eq!(back.kepala_keluarga, keluarga.kepala_keluarga);
        assert_eq!(back.alamat, keluarga.alamat);
        assert_eq!(back.blok, keluarga.blok);
        assert_eq!(back.nomor_rumah, keluarga.nomor_rumah);
        assert_eq!(back.rt, keluarga.rt);
        assert_eq!(back.rw, keluarga.rw);
        assert_eq!(back.status_hunian, keluarga.status_hunian);
        assert_eq!(back.telepon, keluarga.telepon);
        assert_eq!(back.created_at, keluarga.created_at);
        assert_eq!(back.updated_at, keluarga.updated_at);
    }

    #[test]
    fn test_create_dto_rejects_short_nomor_kk() {
        let dto = CreateKeluargaDto {
            nomor_kk: "12345".to_string(),
            kepala_keluarga: "Budi".to_string(),
            alamat: "Jl. Beryl Raya".to_string(),
            blok: "C".to_string(),
            nomor_rumah: "12".to_string(),
            rt: "03".to_string(),
            rw: "07".to_string(),
            status_hunian: StatusHunian::Sewa,
            telepon: None,
        };
        assert!(dto.validate().is_err());
    }
}
