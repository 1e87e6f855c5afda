pub mod dashboard_service;
pub mod statistics;

pub use dashboard_service::DashboardService;
