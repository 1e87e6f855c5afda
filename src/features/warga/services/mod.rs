pub mod warga_service;

pub use warga_service::WargaService;
