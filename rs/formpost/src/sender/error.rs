use thiserror::Error;

use crate::capture::CaptureError;
use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum PostSenderError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Response capture error: {0}")]
    Capture(#[from] CaptureError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[cfg(test)]
    #[error("Mock failure: {0}")]
    Mock(String),
}
