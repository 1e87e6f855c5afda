use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::core::error::{is_unique_violation, AppError, Result};
use crate::features::iuran::dtos::{CreateIuranDto, UpdateIuranDto};
use crate::features::iuran::models::Iuran;

const IURAN_COLUMNS: &str = "id, keluarga_id, jenis_iuran, periode, jumlah, status_bayar, \
     tanggal_bayar, created_at, updated_at";

const DUPLICATE_MESSAGE: &str =
    "Iuran untuk keluarga, jenis, dan periode tersebut sudah tercatat.";

/// The payment date that actually gets stored: paid records keep their
/// explicit date or are stamped `now`, unpaid records never carry one.
pub fn tanggal_bayar_efektif(
    status_bayar: bool,
    tanggal_bayar: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    if status_bayar {
        tanggal_bayar.or(Some(now))
    } else {
        None
    }
}

/// Service for the monthly dues registry.
pub struct IuranService {
    pool: PgPool,
}

impl IuranService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, periode: Option<&str>) -> Result<Vec<Iuran>> {
        let result = match periode {
            Some(periode) => {
                sqlx::query_as::<_, Iuran>(&format!(
                    "SELECT {IURAN_COLUMNS} FROM iuran
                     WHERE periode = $1
                     ORDER BY periode DESC, keluarga_id"
                ))
                .bind(periode)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Iuran>(&format!(
                    "SELECT {IURAN_COLUMNS} FROM iuran ORDER BY periode DESC, keluarga_id"
                ))
                .fetch_all(&self.pool)
                .await
            }
        };

        result.map_err(|e| {
            tracing::error!("Failed to list iuran: {:?}", e);
            AppError::remote_op("Gagal mengambil data iuran.", e)
        })
    }

    pub async fn create(&self, dto: CreateIuranDto, now: DateTime<Utc>) -> Result<Iuran> {
        let tanggal_bayar = tanggal_bayar_efektif(dto.status_bayar, dto.tanggal_bayar, now);

        let iuran = sqlx::query_as::<_, Iuran>(&format!(
            "INSERT INTO iuran
                 (keluarga_id, jenis_iuran, periode, jumlah, status_bayar, tanggal_bayar)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {IURAN_COLUMNS}"
        ))
        .bind(dto.keluarga_id)
        .bind(dto.jenis_iuran)
        .bind(&dto.periode)
        .bind(dto.jumlah)
        .bind(dto.status_bayar)
        .bind(tanggal_bayar)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(DUPLICATE_MESSAGE.to_string())
            } else {
                tracing::error!("Failed to insert iuran: {:?}", e);
                AppError::remote_op("Gagal membuat data iuran.", e)
            }
        })?;

        tracing::info!("Iuran created: id={}, periode={}", iuran.id, iuran.periode);
        Ok(iuran)
    }

    /// Update a dues record. Marking a record paid without an explicit
    /// payment date stamps the current time; marking it unpaid clears the
    /// date. `updated_at` is stamped here.
    pub async fn update(&self, id: i64, dto: UpdateIuranDto, now: DateTime<Utc>) -> Result<Iuran> {
        let tanggal_bayar = tanggal_bayar_efektif(dto.status_bayar, dto.tanggal_bayar, now);

        sqlx::query_as::<_, Iuran>(&format!(
            "UPDATE iuran
             SET keluarga_id = $2,
                 jenis_iuran = $3,
                 periode = $4,
                 jumlah = $5,
                 status_bayar = $6,
                 tanggal_bayar = $7,
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {IURAN_COLUMNS}"
        ))
        .bind(id)
        .bind(dto.keluarga_id)
        .bind(dto.jenis_iuran)
        .bind(&dto.periode)
        .bind(dto.jumlah)
        .bind(dto.status_bayar)
        .bind(tanggal_bayar)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(DUPLICATE_MESSAGE.to_string())
            } else {
                tracing::error!("Failed to update iuran {}: {:?}", id, e);
                AppError::remote_op("Gagal memperbarui data iuran.", e)
            }
        })?
        .ok_or_else(|| AppError::NotFound("Data iuran tidak ditemukan.".to_string()))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM iuran WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete iuran {}: {:?}", id, e);
                AppError::remote_op("Gagal menghapus data iuran.", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Data iuran tidak ditemukan.".to_string()));
        }

        tracing::info!("Iuran deleted: id={}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_paid_without_explicit_date_is_stamped_now() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap();
        assert_eq!(tanggal_bayar_efektif(true, None, now), Some(now));
    }

    #[test]
    fn test_paid_with_explicit_date_keeps_it() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap();
        let paid_at = Utc.with_ymd_and_hms(2024, 6, 5, 14, 0, 0).unwrap();
        assert_eq!(
            tanggal_bayar_efektif(true, Some(paid_at), now),
            Some(paid_at)
        );
    }

    #[test]
    fn test_unpaid_never_carries_a_date() {
        let now = Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap();
        let paid_at = Utc.with_ymd_and_hms(2024, 6, 5, 14, 0, 0).unwrap();
        assert_eq!(tanggal_bayar_efektif(false, Some(paid_at), now), None);
        assert_eq!(tanggal_bayar_efektif(false, None, now), None);
    }
}
