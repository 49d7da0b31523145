use shared::env::get_optional_env_var;

use super::ConfigError;
use crate::form::is_valid_boundary;

pub const BOUNDARY_ENV: &str = "FORMPOST_BOUNDARY";
pub const MAX_RESPONSE_BYTES_ENV: &str = "FORMPOST_MAX_RESPONSE_BYTES";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostSenderConfig {
    /// Fixed boundary for every request. `None` picks a new one per request.
    pub boundary: Option<String>,
    /// Largest response body accepted before the transfer is aborted.
    pub max_response_bytes: Option<usize>,
}

impl PostSenderConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let boundary = get_optional_env_var(BOUNDARY_ENV)?;
        let max_response_bytes = get_optional_env_var(MAX_RESPONSE_BYTES_ENV)?
            .map(|value| parse_max_response_bytes(&value))
            .transpose()?;
        let config = Self {
            boundary,
            max_response_bytes,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects boundaries outside RFC 2046 and a zero response cap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(boundary) = &self.boundary {
            if !is_valid_boundary(boundary) {
                return Err(invalid(BOUNDARY_ENV, boundary));
            }
        }
        if self.max_response_bytes == Some(0) {
            return Err(invalid(MAX_RESPONSE_BYTES_ENV, "0"));
        }
        Ok(())
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_owned(),
        value: value.to_owned(),
    }
}

fn parse_max_response_bytes(value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(invalid(MAX_RESPONSE_BYTES_ENV, value)),
    }
}
