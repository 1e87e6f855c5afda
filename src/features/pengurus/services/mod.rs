pub mod pengurus_service;

pub use pengurus_service::PengurusService;
