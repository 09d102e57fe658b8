pub mod config;
pub mod driver;
pub mod error;
pub mod types;
