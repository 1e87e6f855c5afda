//! Resident (warga) registry. Deletion is always a soft delete.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::WargaService;
