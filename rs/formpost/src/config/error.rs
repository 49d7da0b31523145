use shared::env::EnvError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable error: {0}")]
    EnvError(#[from] EnvError),
    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },
}
