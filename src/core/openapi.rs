use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth;
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::dashboard::services::statistics;
use crate::features::iuran::{
    dtos as iuran_dtos, handlers as iuran_handlers, models as iuran_models,
};
use crate::features::keluarga::{
    dtos as keluarga_dtos, handlers as keluarga_handlers, models as keluarga_models,
};
use crate::features::pengurus::{
    dtos as pengurus_dtos, handlers as pengurus_handlers, models as pengurus_models,
};
use crate::features::registrasi::{dtos as registrasi_dtos, handlers as registrasi_handlers};
use crate::features::summary::handlers as summary_handlers;
use crate::features::warga::{dtos as warga_dtos, handlers as warga_handlers, models as warga_models};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::login,
        auth::handlers::get_me,
        auth::handlers::logout,
        auth::handlers::resolve_view_handler,
        // Warga
        warga_handlers::list_warga,
        warga_handlers::create_warga,
        warga_handlers::update_warga,
        warga_handlers::delete_warga,
        // Keluarga
        keluarga_handlers::list_keluarga,
        keluarga_handlers::create_keluarga,
        keluarga_handlers::update_keluarga,
        keluarga_handlers::delete_keluarga,
        // Iuran
        iuran_handlers::list_iuran,
        iuran_handlers::create_iuran,
        iuran_handlers::update_iuran,
        iuran_handlers::delete_iuran,
        // Pengurus (ketua only)
        pengurus_handlers::list_pengurus,
        pengurus_handlers::create_pengurus,
        // Registration (public)
        registrasi_handlers::register,
        // Dashboard (public)
        dashboard_handlers::get_ringkasan,
        dashboard_handlers::get_direktori_warga,
        dashboard_handlers::get_transparansi_iuran,
        summary_handlers::generate_ringkasan_ai,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth::model::AuthenticatedUser,
            auth::view::View,
            auth::view::ViewResolution,
            auth::dtos::LoginRequestDto,
            auth::dtos::LoginResponseDto,
            auth::dtos::AuthUserDto,
            auth::dtos::MeResponseDto,
            ApiResponse<auth::dtos::LoginResponseDto>,
            ApiResponse<auth::dtos::MeResponseDto>,
            ApiResponse<auth::view::ViewResolution>,
            // Warga
            warga_models::JenisKelamin,
            warga_dtos::CreateWargaDto,
            warga_dtos::UpdateWargaDto,
            warga_dtos::WargaResponseDto,
            ApiResponse<Vec<warga_dtos::WargaResponseDto>>,
            ApiResponse<warga_dtos::WargaResponseDto>,
            // Keluarga
            keluarga_models::StatusHunian,
            keluarga_dtos::CreateKeluargaDto,
            keluarga_dtos::UpdateKeluargaDto,
            keluarga_dtos::KeluargaResponseDto,
            ApiResponse<Vec<keluarga_dtos::KeluargaResponseDto>>,
            ApiResponse<keluarga_dtos::KeluargaResponseDto>,
            // Iuran
            iuran_models::JenisIuran,
            iuran_dtos::CreateIuranDto,
            iuran_dtos::UpdateIuranDto,
            iuran_dtos::IuranResponseDto,
            ApiResponse<Vec<iuran_dtos::IuranResponseDto>>,
            ApiResponse<iuran_dtos::IuranResponseDto>,
            // Pengurus
            pengurus_models::UserRole,
            pengurus_dtos::CreatePengurusDto,
            pengurus_dtos::PengurusResponseDto,
            ApiResponse<Vec<pengurus_dtos::PengurusResponseDto>>,
            ApiResponse<pengurus_dtos::PengurusResponseDto>,
            // Registration
            registrasi_dtos::RegistrasiAnggotaDto,
            registrasi_dtos::RegistrasiDto,
            registrasi_dtos::RegistrasiResponseDto,
            ApiResponse<registrasi_dtos::RegistrasiResponseDto>,
            // Dashboard
            statistics::KelompokUsia,
            statistics::PekerjaanCount,
            statistics::StatusIuranPeriode,
            dashboard_dtos::KeluargaBaruDto,
            dashboard_dtos::DashboardRingkasanDto,
            dashboard_dtos::WargaPublikDto,
            dashboard_dtos::KeluargaBelumLunasDto,
            dashboard_dtos::TransparansiIuranDto,
            dashboard_dtos::RingkasanAiDto,
            ApiResponse<dashboard_dtos::DashboardRingkasanDto>,
            ApiResponse<Vec<dashboard_dtos::WargaPublikDto>>,
            ApiResponse<dashboard_dtos::TransparansiIuranDto>,
            ApiResponse<dashboard_dtos::RingkasanAiDto>,
        )
    ),
    tags(
        (name = "auth", description = "Login, session, and view resolution"),
        (name = "warga", description = "Resident registry (admin)"),
        (name = "keluarga", description = "Household registry (admin)"),
        (name = "iuran", description = "Monthly dues registry (admin)"),
        (name = "pengurus", description = "Administrator accounts (ketua only)"),
        (name = "registrasi", description = "Public self-service registration"),
        (name = "dashboard", description = "Public dashboard and transparency views"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Paguyuban API",
        version = "0.1.0",
        description = "API for the Paguyuban Cluster Beryl management service",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
