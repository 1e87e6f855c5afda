//! Pengurus (administrator) account management.
//!
//! Listing reads the local `profiles` table; creation is delegated to the
//! hosted auth service's privileged admin endpoint, then mirrored into a
//! profile row. Both operations are ketua-only.

pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use clients::AuthAdminClient;
pub use services::PengurusService;
