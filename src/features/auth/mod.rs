//! Session gate for the admin area.
//!
//! Sessions are issued by the hosted auth service and verified locally
//! (HS256, shared secret). The `View` enumeration and its corrective
//! transitions live here so navigation outcomes are decided server-side.

pub mod clients;
pub mod dtos;
pub mod guards;
pub mod handlers;
pub mod jwt;
pub mod model;
pub mod routes;
pub mod services;
pub mod view;

pub use jwt::JwtValidator;
pub use services::AuthService;
