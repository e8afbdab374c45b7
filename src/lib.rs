// Superset config overlay
// Resolves the metadata database URI and secret key from the environment

pub mod cli;
pub mod config;
pub mod connection;
pub mod env;
pub mod error;
pub mod export;

// Re-export commonly used types for convenience
pub use config::{DatabaseSettings, SecretKey, SupersetConfig};
pub use env::{EnvSource, ProcessEnv};
pub use error::ConfigError;
pub use export::ExportFormat;
