//! Structured logger setup.
//!
//! Wraps `tracing` to provide console output plus optional rolling NDJSON
//! file output, with environment-based level control.

use chatstream_config::LoggingConfig;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global structured logger from config.
///
/// `RUST_LOG` takes precedence over the configured level. When a log
/// directory is configured, NDJSON lines are written to
/// `<dir>/chatstream.log.YYYY-MM-DD` alongside the console output.
pub fn init_logging(config: &LoggingConfig) {
    let level = config.level.clone().unwrap_or_else(|| "info".to_string());
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_ansi(true);

    let file_layer = config.dir.as_ref().map(|dir| {
        let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, "chatstream.log");
        fmt::layer()
            .json()
            .with_writer(file_appender)
            .with_ansi(false)
    });

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Initialize logging without a console layer.
///
/// The TUI owns stdout while the alternate screen is active, so the chat
/// command logs to file only; with no directory configured, logs go nowhere.
pub fn init_file_logging(config: &LoggingConfig) {
    let Some(dir) = config.dir.as_ref() else {
        return;
    };
    let level = config.level.clone().unwrap_or_else(|| "info".to_string());
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, "chatstream.log");
    let file_layer = fmt::layer()
        .json()
        .with_writer(file_appender)
        .with_ansi(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init();
}
