use std::sync::Once;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{fmt, EnvFilter, FmtSubscriber};

use super::error::TracingSetupError;
use crate::env::get_optional_env_var;

pub const DEFAULT_LOG_FILTER: &str = "info";

static TRACING_INIT: Once = Once::new();

fn log_filter() -> Result<EnvFilter, TracingSetupError> {
    let directives = get_optional_env_var("RUST_LOG")?;
    let filter = EnvFilter::try_new(directives.as_deref().unwrap_or(DEFAULT_LOG_FILTER))?;
    Ok(filter)
}

/// Installs the global fmt subscriber. Safe to call from every test and
/// every thread; only the first call has an effect.
pub fn setup_tracing() -> Result<(), TracingSetupError> {
    let mut init_result: Result<(), TracingSetupError> = Ok(());

    TRACING_INIT.call_once(|| {
        let filter = match log_filter() {
            Ok(filter) => filter,
            Err(e) => {
                init_result = Err(e);
                return;
            }
        };

        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_timer(UtcTime::rfc_3339())
            .with_ansi(false)
            .fmt_fields(fmt::format::DefaultFields::new())
            .event_format(
                fmt::format()
                    .compact()
                    .with_line_number(true)
                    .with_thread_ids(true),
            )
            .finish();

        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            init_result = Err(e.into());
        }
    });
    init_result
}
