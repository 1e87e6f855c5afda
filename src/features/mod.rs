pub mod auth;
pub mod dashboard;
pub mod iuran;
pub mod keluarga;
pub mod pengurus;
pub mod registrasi;
pub mod summary;
pub mod warga;
