pub mod warga_handler;

pub use warga_handler::*;
