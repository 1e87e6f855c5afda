use sqlx::PgPool;

use crate::core::error::{is_unique_violation, AppError, Result};
use crate::features::warga::dtos::{CreateWargaDto, UpdateWargaDto};
use crate::features::warga::models::Warga;

const WARGA_COLUMNS: &str = "id, keluarga_id, nik, nama_lengkap, jenis_kelamin, tempat_lahir, \
     tanggal_lahir, agama, pendidikan, pekerjaan, status_perkawinan, \
     status_dalam_keluarga, kewarganegaraan, email, telepon, status_hidup, \
     created_at, updated_at";

/// Service for the resident registry.
pub struct WargaService {
    pool: PgPool,
}

impl WargaService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All residents, including soft-deleted ones; callers filter on
    /// `status_hidup` where the distinction matters.
    pub async fn list(&self) -> Result<Vec<Warga>> {
        sqlx::query_as::<_, Warga>(&format!(
            "SELECT {WARGA_COLUMNS} FROM warga ORDER BY nama_lengkap"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list warga: {:?}", e);
            AppError::remote_op("Gagal mengambil data warga.", e)
        })
    }

    pub async fn create(&self, dto: CreateWargaDto) -> Result<Warga> {
        let warga = sqlx::query_as::<_, Warga>(&format!(
            "INSERT INTO warga
                 (keluarga_id, nik, nama_lengkap, jenis_kelamin, tempat_lahir,
                  tanggal_lahir, agama, pendidikan, pekerjaan, status_perkawinan,
                  status_dalam_keluarga, kewarganegaraan, email, telepon, status_hidup)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {WARGA_COLUMNS}"
        ))
        .bind(dto.keluarga_id)
        .bind(&dto.nik)
        .bind(&dto.nama_lengkap)
        .bind(dto.jenis_kelamin)
        .bind(&dto.tempat_lahir)
        .bind(dto.tanggal_lahir)
        .bind(&dto.agama)
        .bind(&dto.pendidikan)
        .bind(&dto.pekerjaan)
        .bind(&dto.status_perkawinan)
        .bind(&dto.status_dalam_keluarga)
        .bind(&dto.kewarganegaraan)
        .bind(&dto.email)
        .bind(&dto.telepon)
        .bind(dto.status_hidup)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict("NIK sudah terdaftar.".to_string())
            } else {
                tracing::error!("Failed to insert warga: {:?}", e);
                AppError::remote_op("Gagal membuat data warga.", e)
            }
        })?;

        tracing::info!("Warga created: id={}", warga.id);
        Ok(warga)
    }

    /// Update a resident. The NIK and liveness flag stay untouched;
    /// `updated_at` is stamped here.
    pub async fn update(&self, id: i64, dto: UpdateWargaDto) -> Result<Warga> {
        sqlx::query_as::<_, Warga>(&format!(
            "UPDATE warga
             SET keluarga_id = $2,
                 nama_lengkap = $3,
                 jenis_kelamin = $4,
                 tempat_lahir = $5,
                 tanggal_lahir = $6,
                 agama = $7,
                 pendidikan = $8,
                 pekerjaan = $9,
                 status_perkawinan = $10,
                 status_dalam_keluarga = $11,
                 kewarganegaraan = $12,
                 email = $13,
                 telepon = $14,
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {WARGA_COLUMNS}"
        ))
        .bind(id)
        .bind(dto.keluarga_id)
        .bind(&dto.nama_lengkap)
        .bind(dto.jenis_kelamin)
        .bind(&dto.tempat_lahir)
        .bind(dto.tanggal_lahir)
        .bind(&dto.agama)
        .bind(&dto.pendidikan)
        .bind(&dto.pekerjaan)
        .bind(&dto.status_perkawinan)
        .bind(&dto.status_dalam_keluarga)
        .bind(&dto.kewarganegaraan)
        .bind(&dto.email)
        .bind(&dto.telepon)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update warga {}: {:?}", id, e);
            AppError::remote_op("Gagal memperbarui data warga.", e)
        })?
        .ok_or_else(|| AppError::NotFound("Data warga tidak ditemukan.".to_string()))
    }

    /// Soft delete: the row survives with `status_hidup = false` and drops
    /// out of every active aggregation and the public directory.
    pub async fn soft_delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query(
            "UPDATE warga SET status_hidup = FALSE, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to soft-delete warga {}: {:?}", id, e);
            AppError::remote_op("Gagal menghapus data warga.", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Data warga tidak ditemukan.".to_string()));
        }

        tracing::info!("Warga soft-deleted: id={}", id);
        Ok(())
    }
}
