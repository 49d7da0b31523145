use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::filter::ParseError;

use crate::env::EnvError;

#[derive(Error, Debug)]
pub enum TracingSetupError {
    #[error("Could not read RUST_LOG: {0}")]
    EnvError(#[from] EnvError),
    #[error("Invalid log filter: {0}")]
    FilterError(#[from] ParseError),
    #[error("Global subscriber already set: {0}")]
    SetGlobalDefaultError(#[from] SetGlobalDefaultError),
}
