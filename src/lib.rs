pub mod config;
pub mod demo;
pub mod error;
pub mod profile;
pub mod telemetry;

pub use error::AppError;
