use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::core::error::Result;
use crate::features::dashboard::dtos::{
    DashboardRingkasanDto, KeluargaBaruDto, KeluargaBelumLunasDto, TransparansiIuranDto,
    WargaPublikDto,
};
use crate::features::dashboard::services::statistics;
use crate::features::iuran::models::Iuran;
use crate::features::iuran::IuranService;
use crate::features::keluarga::models::Keluarga;
use crate::features::keluarga::KeluargaService;
use crate::features::warga::models::Warga;
use crate::features::warga::WargaService;

/// Service for the public views: dashboard statistics, the resident
/// directory, and dues transparency.
pub struct DashboardService {
    warga_service: Arc<WargaService>,
    keluarga_service: Arc<KeluargaService>,
    iuran_service: Arc<IuranService>,
}

impl DashboardService {
    pub fn new(
        warga_service: Arc<WargaService>,
        keluarga_service: Arc<KeluargaService>,
        iuran_service: Arc<IuranService>,
    ) -> Self {
        Self {
            warga_service,
            keluarga_service,
            iuran_service,
        }
    }

    /// The three primary lists, fetched concurrently. All three land
    /// together or the joint fetch fails - no partial state.
    pub async fn fetch_all(&self) -> Result<(Vec<Warga>, Vec<Keluarga>, Vec<Iuran>)> {
        tokio::try_join!(
            self.warga_service.list(),
            self.keluarga_service.list(),
            self.iuran_service.list(None),
        )
    }

    pub async fn ringkasan(&self, now: DateTime<Utc>) -> Result<DashboardRingkasanDto> {
        let (warga, keluarga, iuran) = self.fetch_all().await?;

        let periode = statistics::periode_berjalan(now);
        let today = now.date_naive();

        let total_warga_aktif = warga.iter().filter(|w| w.status_hidup).count() as i64;
        let total_iuran_bulan_ini =
            iuran.iter().filter(|i| i.periode == periode).count() as i64;

        let keluarga_baru = statistics::keluarga_baru(&keluarga, now)
            .into_iter()
            .map(KeluargaBaruDto::from)
            .collect();

        Ok(DashboardRingkasanDto {
            total_warga_aktif,
            total_keluarga: keluarga.len() as i64,
            warga_baru: statistics::jumlah_warga_baru(&warga, now),
            total_iuran_bulan_ini,
            keluarga_baru,
            kelompok_usia: statistics::kelompok_usia(&warga, today),
            status_iuran: statistics::status_iuran_periode(&iuran, &periode),
            pekerjaan_teratas: statistics::pekerjaan_teratas(&warga),
            periode,
        })
    }

    /// Public resident directory: living residents only, joined with their
    /// household's address label.
    pub async fn direktori_warga(&self) -> Result<Vec<WargaPublikDto>> {
        let (warga, keluarga) = tokio::try_join!(
            self.warga_service.list(),
            self.keluarga_service.list(),
        )?;

        let alamat: HashMap<i64, &Keluarga> = keluarga.iter().map(|k| (k.id, k)).collect();

        Ok(warga
            .iter()
            .filter(|w| w.status_hidup)
            .map(|w| {
                let rumah = alamat.get(&w.keluarga_id);
                WargaPublikDto {
                    id: w.id,
                    nama_lengkap: w.nama_lengkap.clone(),
                    jenis_kelamin: w.jenis_kelamin,
                    pekerjaan: w.pekerjaan.clone(),
                    blok: rumah.map(|k| k.blok.clone()),
                    nomor_rumah: rumah.map(|k| k.nomor_rumah.clone()),
                }
            })
            .collect())
    }

    /// Public dues transparency for one period (defaults to the current
    /// month).
    pub async fn transparansi_iuran(
        &self,
        periode: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<TransparansiIuranDto> {
        let (keluarga, iuran) = tokio::try_join!(
            self.keluarga_service.list(),
            self.iuran_service.list(None),
        )?;

        let periode = periode.unwrap_or_else(|| statistics::periode_berjalan(now));

        let belum_lunas = statistics::keluarga_belum_lunas(&keluarga, &iuran, &periode);

        Ok(TransparansiIuranDto {
            total_terkumpul: statistics::total_terkumpul(&iuran, &periode),
            jumlah_keluarga_belum_lunas: belum_lunas.len() as i64,
            estimasi_tunggakan: statistics::estimasi_tunggakan(belum_lunas.len()),
            keluarga_belum_lunas: belum_lunas
                .into_iter()
                .map(KeluargaBelumLunasDto::from)
                .collect(),
            periode,
        })
    }
}
