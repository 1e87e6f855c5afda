use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::pengurus::models::{Profile, UserRole};

/// Request DTO for creating a pengurus account.
///
/// The password is forwarded to the privileged auth-admin endpoint and is
/// never stored by this service.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePengurusDto {
    #[validate(email(message = "Format email tidak valid."))]
    pub email: String,

    #[validate(length(min = 6, message = "Password minimal harus 6 karakter."))]
    pub password: String,

    #[validate(length(min = 1, message = "Nama lengkap wajib diisi."))]
    pub nama_lengkap: String,

    pub role: UserRole,
}

/// Response DTO for a pengurus profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PengurusResponseDto {
    pub id: i64,
    pub email: String,
    pub nama_lengkap: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for PengurusResponseDto {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id,
            email: p.email,
            nama_lengkap: p.nama_lengkap,
            role: p.role,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_response_dto_uses_camel_case_wire_names() {
        let profile = Profile {
            id: 1,
            auth_uid: "uid-1".to_string(),
            email: "bendahara@beryl.test".to_string(),
            nama_lengkap: "Bendahara RW".to_string(),
            role: UserRole::Pengurus,
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        };

        let dto = PengurusResponseDto::from(profile);
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["namaLengkap"], "Bendahara RW");
        assert_eq!(json["role"], "pengurus");
        assert!(json.get("nama_lengkap").is_none());
        // the auth subject never leaves the service
        assert!(json.get("authUid").is_none());
    }

    #[test]
    fn test_create_dto_password_length() {
        use validator::Validate;

        let dto = CreatePengurusDto {
            email: "baru@beryl.test".to_string(),
            password: "12345".to_string(),
            nama_lengkap: "Pengurus Baru".to_string(),
            role: UserRole::Pengurus,
        };
        assert!(dto.validate().is_err());

        let dto = CreatePengurusDto {
            password: "123456".to_string(),
            ..dto
        };
        assert!(dto.validate().is_ok());
    }
}
