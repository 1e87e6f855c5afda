use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::pengurus::models::{Profile, UserRole};

/// The authenticated pengurus behind a validated session token.
///
/// Role semantics:
/// - `ketua`: full CRUD on every registry, plus pengurus management
/// - `pengurus`: read/create/update warga, read/update keluarga and iuran;
///   no deletes, no iuran creation, no pengurus management
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub profile_id: i64,
    pub auth_uid: String,
    pub email: String,
    pub nama_lengkap: String,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn is_ketua(&self) -> bool {
        self.role == UserRole::Ketua
    }
}

impl From<Profile> for AuthenticatedUser {
    fn from(p: Profile) -> Self {
        Self {
            profile_id: p.id,
            auth_uid: p.auth_uid,
            email: p.email,
            nama_lengkap: p.nama_lengkap,
            role: p.role,
        }
    }
}
