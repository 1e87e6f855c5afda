pub mod iuran_dto;

pub use iuran_dto::{CreateIuranDto, IuranQueryParams, IuranResponseDto, UpdateIuranDto};
