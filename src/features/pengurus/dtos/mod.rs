pub mod pengurus_dto;

pub use pengurus_dto::{CreatePengurusDto, PengurusResponseDto};
