pub mod keluarga_dto;

pub use keluarga_dto::{CreateKeluargaDto, KeluargaResponseDto, UpdateKeluargaDto};
