pub mod iuran;

pub use iuran::{Iuran, JenisIuran};
