//! Public views: dashboard statistics, the resident directory, and dues
//! transparency. The statistics themselves are pure functions in
//! `services::statistics`.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::DashboardService;
