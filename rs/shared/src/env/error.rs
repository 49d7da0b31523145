use std::env::VarError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("Variable {key} is not set")]
    Missing { key: String },
    #[error("Variable {key} is not valid unicode: {source}")]
    NotUnicode {
        key: String,
        #[source]
        source: VarError,
    },
}

impl EnvError {
    pub fn from_var_error(error: VarError, key: &str) -> Self {
        match error {
            VarError::NotPresent => EnvError::Missing {
                key: key.to_owned(),
            },
            source @ VarError::NotUnicode(_) => EnvError::NotUnicode {
                key: key.to_owned(),
                source,
            },
        }
    }
}
