pub mod api;
pub mod config;
pub mod database;
pub mod domain;
pub mod models;
pub mod services;

pub use config::*;
pub use database::*;
pub use domain::errors::*;
pub use models::*;
pub use services::*;
