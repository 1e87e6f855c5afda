use sqlx::PgPool;

use crate::core::error::{is_unique_violation, AppError, Result};
use crate::features::keluarga::models::Keluarga;
use crate::features::registrasi::dtos::{RegistrasiDto, RegistrasiResponseDto};
use crate::features::warga::models::Warga;

/// Service for the public self-service registration flow.
///
/// The household and every member row are written in one transaction:
/// either the whole registration lands or none of it does.
pub struct RegistrasiService {
    pool: PgPool,
}

impl RegistrasiService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn register(&self, dto: RegistrasiDto) -> Result<RegistrasiResponseDto> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to start registration transaction: {:?}", e);
            AppError::remote_op("Gagal memproses pendaftaran.", e)
        })?;

        let keluarga = sqlx::query_as::<_, Keluarga>(
            "INSERT INTO keluarga
                 (nomor_kk, kepala_keluarga, alamat, blok, nomor_rumah, rt, rw,
                  status_hunian, telepon)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id, nomor_kk, kepala_keluarga, alamat, blok, nomor_rumah,
                       rt, rw, status_hunian, telepon, created_at, updated_at",
        )
        .bind(&dto.keluarga.nomor_kk)
        .bind(&dto.keluarga.kepala_keluarga)
        .bind(&dto.keluarga.alamat)
        .bind(&dto.keluarga.blok)
        .bind(&dto.keluarga.nomor_rumah)
        .bind(&dto.keluarga.rt)
        .bind(&dto.keluarga.rw)
        .bind(dto.keluarga.status_hunian)
        .bind(&dto.keluarga.telepon)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict("Nomor KK sudah terdaftar.".to_string())
            } else {
                tracing::error!("Failed to insert keluarga during registration: {:?}", e);
                AppError::remote_op("Gagal membuat data keluarga.", e)
            }
        })?;

        let mut anggota = Vec::with_capacity(dto.anggota.len());
        for member in &dto.anggota {
            let warga = sqlx::query_as::<_, Warga>(
                "INSERT INTO warga
                     (keluarga_id, nik, nama_lengkap, jenis_kelamin, tempat_lahir,
                      tanggal_lahir, agama, pendidikan, pekerjaan, status_perkawinan,
                      status_dalam_keluarga, kewarganegaraan, email, telepon, status_hidup)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, TRUE)
                 RETURNING id, keluarga_id, nik, nama_lengkap, jenis_kelamin, tempat_lahir,
                           tanggal_lahir, agama, pendidikan, pekerjaan, status_perkawinan,
                           status_dalam_keluarga, kewarganegaraan, email, telepon,
                           status_hidup, created_at, updated_at",
            )
            .bind(keluarga.id)
            .bind(&member.nik)
            .bind(&member.nama_lengkap)
            .bind(member.jenis_kelamin)
            .bind(&member.tempat_lahir)
            .bind(member.tanggal_lahir)
            .bind(&member.agama)
            .bind(&member.pendidikan)
            .bind(&member.pekerjaan)
            .bind(&member.status_perkawinan)
            .bind(&member.status_dalam_keluarga)
            .bind(&member.kewarganegaraan)
            .bind(&member.email)
            .bind(&member.telepon)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::Conflict(format!("NIK {} sudah terdaftar.", member.nik))
                } else {
                    tracing::error!("Failed to insert warga during registration: {:?}", e);
                    AppError::remote_op("Gagal membuat data warga.", e)
                }
            })?;

            anggota.push(warga);
        }

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit registration: {:?}", e);
            AppError::remote_op("Gagal memproses pendaftaran.", e)
        })?;

        tracing::info!(
            "Registration completed: keluarga_id={}, anggota={}",
            keluarga.id,
            anggota.len()
        );

        Ok(RegistrasiResponseDto {
            keluarga: keluarga.into(),
            anggota: anggota.into_iter().map(Into::into).collect(),
        })
    }
}
