mod env;
mod error;

pub use env::{get_env_var, get_optional_env_var};
pub use error::EnvError;
