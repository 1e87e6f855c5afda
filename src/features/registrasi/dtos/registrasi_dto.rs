use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::keluarga::dtos::{CreateKeluargaDto, KeluargaResponseDto};
use crate::features::warga::dtos::WargaResponseDto;
use crate::features::warga::models::JenisKelamin;
use crate::shared::validation::NIK_REGEX;

/// One household member in a self-service registration. The household link
/// and liveness flag are filled in by the service.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrasiAnggotaDto {
    #[validate(regex(path = *NIK_REGEX, message = "NIK harus 16 digit angka."))]
    pub nik: String,

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

/// Request DTO for the public self-service registration flow:
/// one household plus its members, stored atomically.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrasiDto {
    #[validate(nested)]
    pub keluarga: CreateKeluargaDto,

    #[validate(
        length(min = 1, message = "Minimal satu anggota keluarga harus diisi."),
        nested
    )]
    pub anggota: Vec<RegistrasiAnggotaDto>,
}

/// Response DTO for a completed registration
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrasiResponseDto {
    pub keluarga: KeluargaResponseDto,
    pub anggota: Vec<WargaResponseDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::keluarga::models::StatusHunian;

    fn valid_dto() -> RegistrasiDto {
        RegistrasiDto {
            keluarga: CreateKeluargaDto {
                nomor_kk: "3201012501990001".to_string(),
                kepala_keluarga: "Budi".to_string(),
                alamat: "Jl. Beryl Raya".to_string(),
                blok: "C".to_string(),
                nomor_rumah: "12".to_string(),
                rt: "03".to_string(),
                rw: "07".to_string(),
                status_hunian: StatusHunian::Pemilik,
                telepon: None,
            },
            anggota: vec![RegistrasiAnggotaDto {
                nik: "1234567890123456".to_string(),
                nama_lengkap: "Budi".to_string(),
                jenis_kelamin: JenisKelamin::L,
                tempat_lahir: None,
                tanggal_lahir: NaiveDate::from_ymd_opt(1990, 1, 25).unwrap(),
                agama: None,
                pendidikan: None,
                pekerjaan: "Karyawan Swasta".to_string(),
                status_perkawinan: None,
                status_dalam_keluarga: Some("Kepala Keluarga".to_string()),
                kewarganegaraan: None,
                email: None,
                telepon: None,
            }],
        }
    }

    #[test]
    fn test_registration_requires_at_least_one_member() {
        let mut dto = valid_dto();
        assert!(dto.validate().is_ok());

        dto.anggota.clear();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_registration_validates_nested_members() {
        let mut dto = valid_dto();
        dto.anggota[0].nik = "123".to_string();
        assert!(dto.validate().is_err());
    }
}
