pub mod admin_api;
pub mod github;
