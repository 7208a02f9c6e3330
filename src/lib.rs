pub mod api;
pub mod commands;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod infrastructure;
pub mod services;

pub use error::{Result, SiteError};
