mod error;
mod tracing;

pub use self::tracing::{setup_tracing, DEFAULT_LOG_FILTER};
pub use error::TracingSetupError;
