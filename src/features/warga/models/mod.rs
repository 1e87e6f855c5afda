pub mod warga;

pub use warga::{JenisKelamin, Warga};
