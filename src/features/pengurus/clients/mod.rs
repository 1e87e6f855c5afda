pub mod auth_admin;

pub use auth_admin::AuthAdminClient;
