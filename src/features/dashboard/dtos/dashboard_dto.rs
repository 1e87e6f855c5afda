use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::dashboard::services::statistics::{
    KelompokUsia, PekerjaanCount, StatusIuranPeriode,
};
use crate::features::keluarga::models::Keluarga;
use crate::features::warga::models::JenisKelamin;

/// A household on the dashboard welcome card
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeluargaBaruDto {
    pub id: i64,
    pub kepala_keluarga: String,
    pub blok: String,
    pub nomor_rumah: String,
}

impl From<&Keluarga> for KeluargaBaruDto {
    fn from(k: &Keluarga) -> Self {
        Self {
            id: k.id,
            kepala_keluarga: k.kepala_keluarga.clone(),
            blok: k.blok.clone(),
            nomor_rumah: k.nomor_rumah.clone(),
        }
    }
}

/// Everything the public dashboard renders
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRingkasanDto {
    pub total_warga_aktif: i64,
    pub total_keluarga: i64,
    pub warga_baru: i64,
    /// Billing period the dues chart covers (current month)
    pub periode: String,
    pub total_iuran_bulan_ini: i64,
    pub keluarga_baru: Vec<KeluargaBaruDto>,
    pub kelompok_usia: KelompokUsia,
    pub status_iuran: StatusIuranPeriode,
    pub pekerjaan_teratas: Vec<PekerjaanCount>,
}

/// A resident in the public directory (living residents only,
/// no NIK or contact details)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WargaPublikDto {
    pub id: i64,
    pub nama_lengkap: String,
    pub jenis_kelamin: JenisKelamin,
    pub pekerjaan: String,
    pub blok: Option<String>,
    pub nomor_rumah: Option<String>,
}

/// A household on the public unpaid list
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeluargaBelumLunasDto {
    pub id: i64,
    pub kepala_keluarga: String,
    pub blok: String,
    pub nomor_rumah: String,
}

impl From<&Keluarga> for KeluargaBelumLunasDto {
    fn from(k: &Keluarga) -> Self {
        Self {
            id: k.id,
            kepala_keluarga: k.kepala_keluarga.clone(),
            blok: k.blok.clone(),
            nomor_rumah: k.nomor_rumah.clone(),
        }
    }
}

/// Public dues transparency for one billing period
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransparansiIuranDto {
    pub periode: String,
    /// Exact sum of paid amounts in the period
    pub total_terkumpul: i64,
    pub jumlah_keluarga_belum_lunas: i64,
    /// Unpaid-household count times the flat monthly fee - an estimate,
    /// not a per-record sum
    pub estimasi_tunggakan: i64,
    pub keluarga_belum_lunas: Vec<KeluargaBelumLunasDto>,
}

/// Query parameters for the transparency page
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct TransparansiQueryParams {
    /// `YYYY-MM` billing period; defaults to the current month
    pub periode: Option<String>,
}

/// The AI-generated narrative report
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RingkasanAiDto {
    /// Markdown text: either the generated report or a user-facing
    /// explanation of why it could not be produced
    pub ringkasan: String,
}
