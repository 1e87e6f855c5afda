pub mod keluarga;

pub use keluarga::{Keluarga, StatusHunian};
