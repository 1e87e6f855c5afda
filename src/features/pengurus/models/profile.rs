use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Administrator role enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Ketua,
    Pengurus,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Ketua => write!(f, "ketua"),
            UserRole::Pengurus => write!(f, "pengurus"),
        }
    }
}

/// Database model for a pengurus profile. The `auth_uid` column links the
/// row to its subject at the hosted auth service.
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: i64,
    pub auth_uid: String,
    pub email: String,
    pub nama_lengkap: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
