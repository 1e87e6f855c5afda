use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::view::View;
use crate::features::pengurus::models::UserRole;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequestDto {
    #[validate(email(message = "Format email tidak valid."))]
    pub email: String,

    #[validate(length(min = 1, message = "Password wajib diisi."))]
    pub password: String,
}

/// The pengurus as seen by the web client
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthUserDto {
    pub id: i64,
    pub email: String,
    pub nama_lengkap: String,
    pub role: UserRole,
}

impl From<AuthenticatedUser> for AuthUserDto {
    fn from(u: AuthenticatedUser) -> Self {
        Self {
            id: u.profile_id,
            email: u.email,
            nama_lengkap: u.nama_lengkap,
            role: u.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseDto {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<i64>,
    pub user: AuthUserDto,
    /// Where the client should navigate after this login
    pub redirect_view: View,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeResponseDto {
    pub user: AuthUserDto,
}
