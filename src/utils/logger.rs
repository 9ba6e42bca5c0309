use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber described by `config`.
///
/// `RUST_LOG` wins over `config.level` when set. Returns `false` if a global
/// subscriber was already installed.
pub fn init_logger(config: &LoggingConfig) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let installed = match config.format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.compact())
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .try_init(),
    };

    installed.is_ok()
}

pub fn init_default_logger(verbose: bool) -> bool {
    let level = if verbose {
        "model_conversion=debug,info"
    } else {
        "model_conversion=info"
    };

    init_logger(&LoggingConfig {
        level: level.to_string(),
        format: LogFormat::Compact,
    })
}
