pub mod registrasi_service;

pub use registrasi_service::RegistrasiService;
