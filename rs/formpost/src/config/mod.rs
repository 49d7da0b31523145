mod config;
mod error;

pub use config::{PostSenderConfig, BOUNDARY_ENV, MAX_RESPONSE_BYTES_ENV};
pub use error::ConfigError;
