pub mod warga_dto;

pub use warga_dto::{CreateWargaDto, UpdateWargaDto, WargaResponseDto};
