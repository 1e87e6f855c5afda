pub mod iuran_service;

pub use iuran_service::IuranService;
