use std::env::{var, VarError};

use super::EnvError;

pub fn get_env_var(key: &str) -> Result<String, EnvError> {
    var(key).map_err(|e| EnvError::from_var_error(e, key))
}

/// Like [`get_env_var`], but an unset variable is `None` rather than an error.
/// A variable holding non-unicode data is still an error.
pub fn get_optional_env_var(key: &str) -> Result<Option<String>, EnvError> {
    match var(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(EnvError::from_var_error(e, key)),
    }
}
