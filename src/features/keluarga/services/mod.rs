pub mod keluarga_service;

pub use keluarga_service::KeluargaService;
