pub mod config;

pub use config::{AppConfig, GridConfig, CONFIG_ENV};
