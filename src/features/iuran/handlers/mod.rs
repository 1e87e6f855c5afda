pub mod iuran_handler;

pub use iuran_handler::*;
