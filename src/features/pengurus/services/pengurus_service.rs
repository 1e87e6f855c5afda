use std::sync::Arc;

use sqlx::PgPool;

use crate::core::error::{is_unique_violation, AppError, Result};
use crate::features::pengurus::clients::AuthAdminClient;
use crate::features::pengurus::dtos::CreatePengurusDto;
use crate::features::pengurus::models::Profile;

/// Service for pengurus account management (ketua only).
pub struct PengurusService {
    pool: PgPool,
    auth_admin: Arc<AuthAdminClient>,
}

impl PengurusService {
    pub fn new(pool: PgPool, auth_admin: Arc<AuthAdminClient>) -> Self {
        Self { pool, auth_admin }
    }

    pub async fn list(&self) -> Result<Vec<Profile>> {
        sqlx::query_as::<_, Profile>(
            "SELECT id, auth_uid, email, nama_lengkap, role, created_at, updated_at
             FROM profiles
             ORDER BY nama_lengkap",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list profiles: {:?}", e);
            AppError::remote_op("Gagal mengambil data pengurus.", e)
        })
    }

    /// Create a pengurus: account first at the hosted auth service (the
    /// privileged call), then the local profile row.
    pub async fn create(&self, dto: CreatePengurusDto) -> Result<Profile> {
        let created = self
            .auth_admin
            .create_user(&dto.email, &dto.password)
            .await?;

        let profile = sqlx::query_as::<_, Profile>(
            "INSERT INTO profiles (auth_uid, email, nama_lengkap, role)
             VALUES ($1, $2, $3, $4)
             RETURNING id, auth_uid, email, nama_lengkap, role, created_at, updated_at",
        )
        .bind(&created.id)
        .bind(&dto.email)
        .bind(&dto.nama_lengkap)
        .bind(dto.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict("Email sudah terdaftar, gunakan email lain.".to_string())
            } else {
                tracing::error!("Failed to insert profile: {:?}", e);
                AppError::remote_op("Gagal membuat data pengurus.", e)
            }
        })?;

        tracing::info!(
            "Pengurus created: id={}, email={}, role={}",
            profile.id,
            profile.email,
            profile.role
        );

        Ok(profile)
    }
}
