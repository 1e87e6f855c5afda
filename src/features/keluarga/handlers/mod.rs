pub mod keluarga_handler;

pub use keluarga_handler::*;
