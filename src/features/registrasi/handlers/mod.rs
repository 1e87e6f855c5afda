pub mod registrasi_handler;

pub use registrasi_handler::*;
