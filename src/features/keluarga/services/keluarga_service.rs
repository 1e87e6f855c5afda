use sqlx::PgPool;

use crate::core::error::{is_unique_violation, AppError, Result};
use crate::features::keluarga::dtos::{CreateKeluargaDto, UpdateKeluargaDto};
use crate::features::keluarga::models::Keluarga;

const KELUARGA_COLUMNS: &str = "id, nomor_kk, kepala_keluarga, alamat, blok, nomor_rumah, \
     rt, rw, status_hunian, telepon, created_at, updated_at";

/// Service for the household registry.
pub struct KeluargaService {
    pool: PgPool,
}

impl KeluargaService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Keluarga>> {
        sqlx::query_as::<_, Keluarga>(&format!(
            "SELECT {KELUARGA_COLUMNS} FROM keluarga ORDER BY blok, nomor_rumah"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list keluarga: {:?}", e);
            AppError::remote_op("Gagal mengambil data keluarga.", e)
        })
    }

    pub async fn create(&self, dto: CreateKeluargaDto) -> Result<Keluarga> {
        let keluarga = sqlx::query_as::<_, Keluarga>(&format!(
            "INSERT INTO keluarga
                 (nomor_kk, kepala_keluarga, alamat, blok, nomor_rumah, rt, rw,
                  status_hunian, telepon)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {KELUARGA_COLUMNS}"
        ))
        .bind(&dto.nomor_kk)
        .bind(&dto.kepala_keluarga)
        .bind(&dto.alamat)
        .bind(&dto.blok)
        .bind(&dto.nomor_rumah)
        .bind(&dto.rt)
        .bind(&dto.rw)
        .bind(dto.status_hunian)
        .bind(&dto.telepon)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict("Nomor KK sudah terdaftar.".to_string())
            } else {
                tracing::error!("Failed to insert keluarga: {:?}", e);
                AppError::remote_op("Gagal membuat data keluarga.", e)
            }
        })?;

        tracing::info!("Keluarga created: id={}", keluarga.id);
        Ok(keluarga)
    }

    /// Update a household. `nomor_kk` is immutable and never touched;
    /// `updated_at` is stamped here, callers do not supply it.
    pub async fn update(&self, id: i64, dto: UpdateKeluargaDto) -> Result<Keluarga> {
        sqlx::query_as::<_, Keluarga>(&format!(
            "UPDATE keluarga
             SET kepala_keluarga = $2,
                 alamat = $3,
                 blok = $4,
                 nomor_rumah = $5,
                 rt = $6,
                 rw = $7,
                 status_hunian = $8,
                 telepon = $9,
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {KELUARGA_COLUMNS}"
        ))
        .bind(id)
        .bind(&dto.kepala_keluarga)
        .bind(&dto.alamat)
        .bind(&dto.blok)
        .bind(&dto.nomor_rumah)
        .bind(&dto.rt)
        .bind(&dto.rw)
        .bind(dto.status_hunian)
        .bind(&dto.telepon)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update keluarga {}: {:?}", id, e);
            AppError::remote_op("Gagal memperbarui data keluarga.", e)
        })?
        .ok_or_else(|| AppError::NotFound("Data keluarga tidak ditemukan.".to_string()))
    }

    /// Delete a household through the guarded stored procedure, which
    /// refuses while dependent warga/iuran rows exist.
    pub async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("SELECT delete_keluarga_safe($1)")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match e.as_database_error() {
                // P0001: raise_exception from the guard - surface its message
                Some(db) if db.code().as_deref() == Some("P0001") => {
                    AppError::Conflict(db.message().to_string())
                }
                _ => {
                    tracing::error!("Failed to delete keluarga {}: {:?}", id, e);
                    AppError::remote_op("Gagal menghapus keluarga.", e)
                }
            })?;

        tracing::info!("Keluarga deleted: id={}", id);
        Ok(())
    }
}
