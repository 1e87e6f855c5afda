//! Derived-statistics engine for the public dashboard and transparency
//! pages.
//!
//! Everything here is a pure function over already-loaded lists; "now" is
//! always a parameter, never read from the clock, so results are
//! deterministic for a given input.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::features::iuran::models::Iuran;
use crate::features::keluarga::models::Keluarga;
use crate::features::warga::models::Warga;
use crate::shared::constants::{
    BATAS_HARI_ANGGOTA_BARU, BATAS_USIA_ANAK, BATAS_USIA_DEWASA, IURAN_BULANAN_FLAT,
    JUMLAH_PEKERJAAN_TERATAS,
};

/// Whole-years age with the has-the-birthday-occurred adjustment.
/// A missing birth date counts as 0 instead of failing.
pub fn hitung_usia(tanggal_lahir: Option<NaiveDate>, today: NaiveDate) -> i32 {
    let Some(lahir) = tanggal_lahir else {
        return 0;
    };

    let mut usia = today.year() - lahir.year();
    if (today.month(), today.day()) < (lahir.month(), lahir.day()) {
        usia -= 1;
    }
    usia
}

/// The `YYYY-MM` billing period containing `now`.
pub fn periode_berjalan(now: DateTime<Utc>) -> String {
    format!("{:04}-{:02}", now.year(), now.month())
}

/// Age-bucket counts over living residents only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KelompokUsia {
    /// 0-17 years
    pub anak: i64,
    /// 18-60 years
    pub dewasa: i64,
    /// over 60 years
    pub lansia: i64,
}

pub fn kelompok_usia(warga: &[Warga], today: NaiveDate) -> KelompokUsia {
    let mut kelompok = KelompokUsia {
        anak: 0,
        dewasa: 0,
        lansia: 0,
    };

    for w in warga.iter().filter(|w| w.status_hidup) {
        let usia = hitung_usia(Some(w.tanggal_lahir), today);
        if usia <= BATAS_USIA_ANAK {
            kelompok.anak += 1;
        } else if usia <= BATAS_USIA_DEWASA {
            kelompok.dewasa += 1;
        } else {
            kelompok.lansia += 1;
        }
    }

    kelompok
}

/// One occupation group on the dashboard chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PekerjaanCount {
    pub pekerjaan: String,
    pub jumlah: i64,
}

/// Top occupation groups among living residents, descending by count.
/// Ties keep first-encountered order; an empty occupation falls into the
/// "Lainnya" group.
pub fn pekerjaan_teratas(warga: &[Warga]) -> Vec<PekerjaanCount> {
    let mut urutan: Vec<&str> = Vec::new();
    let mut jumlah: HashMap<&str, i64> = HashMap::new();

    for w in warga.iter().filter(|w| w.status_hidup) {
        let pekerjaan = if w.pekerjaan.trim().is_empty() {
            "Lainnya"
        } else {
            w.pekerjaan.as_str()
        };

        if !jumlah.contains_key(pekerjaan) {
            urutan.push(pekerjaan);
        }
        *jumlah.entry(pekerjaan).or_insert(0) += 1;
    }

    let mut teratas: Vec<PekerjaanCount> = urutan
        .into_iter()
        .map(|p| PekerjaanCount {
            pekerjaan: p.to_string(),
            jumlah: jumlah[p],
        })
        .collect();

    // stable sort keeps first-encountered order on equal counts
    teratas.sort_by(|a, b| b.jumlah.cmp(&a.jumlah));
    teratas.truncate(JUMLAH_PEKERJAAN_TERATAS);
    teratas
}

fn batas_baru(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(BATAS_HARI_ANGGOTA_BARU)
}

/// Living residents created within the new-member window
pub fn jumlah_warga_baru(warga: &[Warga], now: DateTime<Utc>) -> i64 {
    let batas = batas_baru(now);
    warga
        .iter()
        .filter(|w| w.status_hidup && w.created_at >= batas)
        .count() as i64
}

/// Households created within the new-member window (the welcome card)
pub fn keluarga_baru<'a>(keluarga: &'a [Keluarga], now: DateTime<Utc>) -> Vec<&'a Keluarga> {
    let batas = batas_baru(now);
    keluarga.iter().filter(|k| k.created_at >= batas).collect()
}

/// Paid/unpaid transaction counts for one billing period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusIuranPeriode {
    pub lunas: i64,
    pub belum_lunas: i64,
}

pub fn status_iuran_periode(iuran: &[Iuran], periode: &str) -> StatusIuranPeriode {
    let mut status = StatusIuranPeriode {
        lunas: 0,
        belum_lunas: 0,
    };

    for i in iuran.iter().filter(|i| i.periode == periode) {
        if i.status_bayar {
            status.lunas += 1;
        } else {
            status.belum_lunas += 1;
        }
    }

    status
}

/// Exact sum of paid amounts for one billing period
pub fn total_terkumpul(iuran: &[Iuran], periode: &str) -> i64 {
    iuran
        .iter()
        .filter(|i| i.periode == periode && i.status_bayar)
        .map(|i| i.jumlah)
        .sum()
}

/// Households with no paid dues record in the period: the complement of
/// the paid set against all households.
pub fn keluarga_belum_lunas<'a>(
    keluarga: &'a [Keluarga],
    iuran: &[Iuran],
    periode: &str,
) -> Vec<&'a Keluarga> {
    let sudah_bayar: HashSet<i64> = iuran
        .iter()
        .filter(|i| i.periode == periode && i.status_bayar)
        .map(|i| i.keluarga_id)
        .collect();

    keluarga
        .iter()
        .filter(|k| !sudah_bayar.contains(&k.id))
        .collect()
}

/// Estimated aggregate arrears: unpaid-household count times the flat
/// monthly fee. An approximation, not a per-record sum.
pub fn estimasi_tunggakan(jumlah_keluarga_belum_lunas: usize) -> i64 {
    jumlah_keluarga_belum_lunas as i64 * IURAN_BULANAN_FLAT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::iuran::models::JenisIuran;
    use crate::features::keluarga::models::StatusHunian;
    use crate::features::warga::models::JenisKelamin;
    use chrono::TimeZone;

    fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn warga(id: i64, lahir: (i32, u32, u32), pekerjaan: &str, hidup: bool) -> Warga {
        Warga {
            id,
            keluarga_id: 1,
            nik: format!("{:016}", id),
            nama_lengkap: format!("Warga {}", id),
            jenis_kelamin: JenisKelamin::L,
            tempat_lahir: None,
            tanggal_lahir: NaiveDate::from_ymd_opt(lahir.0, lahir.1, lahir.2).unwrap(),
            agama: None,
            pendidikan: None,
            pekerjaan: pekerjaan.to_string(),
            status_perkawinan: None,
            status_dalam_keluarga: None,
            kewarganegaraan: None,
            email: None,
            telepon: None,
            status_hidup: hidup,
            created_at: ts(2024, 1, 1),
            updated_at: ts(2024, 1, 1),
        }
    }

    fn keluarga(id: i64, kepala: &str) -> Keluarga {
        Keluarga {
            id,
            nomor_kk: format!("{:016}", id),
            kepala_keluarga: kepala.to_string(),
            alamat: "Jl. Beryl Raya".to_string(),
            blok: "A".to_string(),
            nomor_rumah: id.to_string(),
            rt: "01".to_string(),
            rw: "01".to_string(),
            status_hunian: StatusHunian::Pemilik,
            telepon: None,
            created_at: ts(2024, 1, 1),
            updated_at: ts(2024, 1, 1),
        }
    }

    fn iuran(id: i64, keluarga_id: i64, periode: &str, bayar: bool) -> Iuran {
        Iuran {
            id,
            keluarga_id,
            jenis_iuran: JenisIuran::Keamanan,
            periode: periode.to_string(),
            jumlah: 150_000,
            status_bayar: bayar,
            tanggal_bayar: bayar.then(|| ts(2024, 6, 5)),
            created_at: ts(2024, 6, 1),
            updated_at: ts(2024, 6, 1),
        }
    }

    // -- age ---------------------------------------------------------------

    #[test]
    fn test_hitung_usia_before_and_after_birthday() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        // birthday already passed this year
        assert_eq!(
            hitung_usia(NaiveDate::from_ymd_opt(2010, 5, 1), today),
            14
        );
        // birthday later this year
        assert_eq!(
            hitung_usia(NaiveDate::from_ymd_opt(2010, 7, 1), today),
            13
        );
        // birthday today
        assert_eq!(
            hitung_usia(NaiveDate::from_ymd_opt(2010, 6, 1), today),
            14
        );
    }

    #[test]
    fn test_hitung_usia_missing_birth_date_is_zero() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(hitung_usia(None, today), 0);
    }

    #[test]
    fn test_kelompok_usia_buckets_and_total() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let daftar = vec![
            warga(1, (2010, 5, 1), "Pelajar", true),  // 14 -> anak
            warga(2, (2006, 6, 2), "Pelajar", true),  // 17 -> anak (birthday tomorrow)
            warga(3, (1990, 1, 1), "Guru", true),     // 34 -> dewasa
            warga(4, (1964, 5, 1), "Pensiunan", true), // 60 -> dewasa
            warga(5, (1950, 1, 1), "Pensiunan", true), // 74 -> lansia
            warga(6, (1940, 1, 1), "Pensiunan", false), // deceased, excluded
        ];

        let kelompok = kelompok_usia(&daftar, today);
        assert_eq!(kelompok.anak, 2);
        assert_eq!(kelompok.dewasa, 2);
        assert_eq!(kelompok.lansia, 1);

        let aktif = daftar.iter().filter(|w| w.status_hidup).count() as i64;
        assert_eq!(kelompok.anak + kelompok.dewasa + kelompok.lansia, aktif);
    }

    #[test]
    fn test_scenario_pelajar_is_counted_as_anak() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let w = warga(1, (2010, 5, 1), "Pelajar", true);

        assert!(hitung_usia(Some(w.tanggal_lahir), today) <= BATAS_USIA_ANAK);

        let kelompok = kelompok_usia(std::slice::from_ref(&w), today);
        assert_eq!(kelompok.anak, 1);

        let teratas = pekerjaan_teratas(std::slice::from_ref(&w));
        assert_eq!(teratas[0].pekerjaan, "Pelajar");
        assert_eq!(teratas[0].jumlah, 1);
    }

    // -- occupations -------------------------------------------------------

    #[test]
    fn test_pekerjaan_teratas_caps_at_five_sorted_descending() {
        let mut daftar = Vec::new();
        let mut id = 0;
        for (pekerjaan, n) in [
            ("Guru", 4),
            ("Pelajar", 6),
            ("Karyawan Swasta", 5),
            ("Dokter", 1),
            ("Petani", 2),
            ("Nelayan", 3),
        ] {
            for _ in 0..n {
                id += 1;
                daftar.push(warga(id, (1990, 1, 1), pekerjaan, true));
            }
        }

        let teratas = pekerjaan_teratas(&daftar);
        assert_eq!(teratas.len(), 5);
        assert_eq!(teratas[0].pekerjaan, "Pelajar");
        for pair in teratas.windows(2) {
            assert!(pair[0].jumlah >= pair[1].jumlah);
        }
        // "Dokter" (1) is the group that falls off
        assert!(teratas.iter().all(|p| p.pekerjaan != "Dokter"));

        let total: i64 = teratas.iter().map(|p| p.jumlah).sum();
        assert!(total <= daftar.len() as i64);
    }

    #[test]
    fn test_pekerjaan_teratas_ties_keep_first_encountered_order() {
        let daftar = vec![
            warga(1, (1990, 1, 1), "Guru", true),
            warga(2, (1990, 1, 1), "Petani", true),
            warga(3, (1990, 1, 1), "Nelayan", true),
        ];

        let teratas = pekerjaan_teratas(&daftar);
        let nama: Vec<&str> = teratas.iter().map(|p| p.pekerjaan.as_str()).collect();
        assert_eq!(nama, vec!["Guru", "Petani", "Nelayan"]);
    }

    #[test]
    fn test_pekerjaan_kosong_masuk_lainnya() {
        let daftar = vec![
            warga(1, (1990, 1, 1), "", true),
            warga(2, (1990, 1, 1), "  ", true),
        ];

        let teratas = pekerjaan_teratas(&daftar);
        assert_eq!(teratas.len(), 1);
        assert_eq!(teratas[0].pekerjaan, "Lainnya");
        assert_eq!(teratas[0].jumlah, 2);
    }

    #[test]
    fn test_pekerjaan_teratas_excludes_deceased() {
        let daftar = vec![
            warga(1, (1990, 1, 1), "Guru", true),
            warga(2, (1990, 1, 1), "Guru", false),
        ];

        let teratas = pekerjaan_teratas(&daftar);
        assert_eq!(teratas[0].jumlah, 1);
    }

    // -- new-member window -------------------------------------------------

    #[test]
    fn test_new_member_window_is_inclusive_three_days() {
        let now = ts(2024, 6, 10);

        let mut baru = warga(1, (1990, 1, 1), "Guru", true);
        baru.created_at = ts(2024, 6, 8);
        let mut batas = warga(2, (1990, 1, 1), "Guru", true);
        batas.created_at = now - Duration::days(BATAS_HARI_ANGGOTA_BARU);
        let mut lama = warga(3, (1990, 1, 1), "Guru", true);
        lama.created_at = ts(2024, 6, 1);

        assert_eq!(jumlah_warga_baru(&[baru, batas, lama], now), 2);

        let mut k_baru = keluarga(1, "Budi");
        k_baru.created_at = ts(2024, 6, 9);
        let mut k_lama = keluarga(2, "Siti");
        k_lama.created_at = ts(2024, 5, 1);
        let daftar = vec![k_baru, k_lama];

        let hasil = keluarga_baru(&daftar, now);
        assert_eq!(hasil.len(), 1);
        assert_eq!(hasil[0].kepala_keluarga, "Budi");
    }

    // -- dues split --------------------------------------------------------

    #[test]
    fn test_status_iuran_partitions_the_period() {
        let daftar = vec![
            iuran(1, 1, "2024-06", true),
            iuran(2, 2, "2024-06", false),
            iuran(3, 3, "2024-06", true),
            iuran(4, 1, "2024-05", false), // other period, excluded
        ];

        let status = status_iuran_periode(&daftar, "2024-06");
        assert_eq!(status.lunas, 2);
        assert_eq!(status.belum_lunas, 1);

        let dalam_periode = daftar.iter().filter(|i| i.periode == "2024-06").count() as i64;
        assert_eq!(status.lunas + status.belum_lunas, dalam_periode);
    }

    #[test]
    fn test_total_terkumpul_sums_only_paid_in_period() {
        let daftar = vec![
            iuran(1, 1, "2024-06", true),
            iuran(2, 2, "2024-06", false),
            iuran(3, 3, "2024-05", true),
        ];

        assert_eq!(total_terkumpul(&daftar, "2024-06"), 150_000);
    }

    // -- unpaid-household derivation ---------------------------------------

    #[test]
    fn test_keluarga_belum_lunas_is_complement_of_paid_set() {
        let rumah = vec![keluarga(1, "Budi"), keluarga(2, "Siti"), keluarga(3, "Andi")];
        let tagihan = vec![
            iuran(1, 1, "2024-06", true),
            // household 2 has only an unpaid record
            iuran(2, 2, "2024-06", false),
            // household 3 has no record at all
            // household 1 paid in another period too - irrelevant
            iuran(3, 1, "2024-05", true),
        ];

        let belum = keluarga_belum_lunas(&rumah, &tagihan, "2024-06");
        let ids: Vec<i64> = belum.iter().map(|k| k.id).collect();
        assert_eq!(ids, vec![2, 3]);

        assert_eq!(estimasi_tunggakan(belum.len()), 2 * IURAN_BULANAN_FLAT);
    }

    #[test]
    fn test_household_with_any_paid_record_is_not_unpaid() {
        let rumah = vec![keluarga(1, "Budi")];
        let tagihan = vec![
            iuran(1, 1, "2024-06", false),
            iuran(2, 1, "2024-06", true),
        ];

        let belum = keluarga_belum_lunas(&rumah, &tagihan, "2024-06");
        assert!(belum.is_empty());
    }

    // -- period helper -----------------------------------------------------

    #[test]
    fn test_periode_berjalan_formats_yyyy_mm() {
        assert_eq!(periode_berjalan(ts(2024, 6, 15)), "2024-06");
        assert_eq!(periode_berjalan(ts(2023, 12, 1)), "2023-12");
    }
}
