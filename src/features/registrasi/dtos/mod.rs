pub mod registrasi_dto;

pub use registrasi_dto::{RegistrasiAnggotaDto, RegistrasiDto, RegistrasiResponseDto};
