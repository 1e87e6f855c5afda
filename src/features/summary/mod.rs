//! AI narrative summary: a fixed-structure Indonesian executive report
//! generated by Gemini from the current registries.

pub mod client;
pub mod handlers;
pub mod routes;
pub mod services;

pub use client::GeminiClient;
pub use services::SummaryService;
