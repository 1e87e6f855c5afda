pub mod pengurus_handler;

pub use pengurus_handler::*;
