//! Config validation with user-friendly messages.

use crate::schema::ChatStreamConfig;
use thiserror::Error;

/// A config validation finding with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// A collection of validation findings from one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &ChatStreamConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    if config.port() == 0 {
        report.error("gateway.port", "Port 0 is not a usable listen port");
    }

    if config.reply_text().is_empty() {
        report.warn(
            "reply.text",
            "Reply text is empty; streams will close immediately",
        );
    }

    // A full canned reply at >1s per character takes minutes to stream.
    if config.char_delay_ms() > 1000 {
        report.warn(
            "reply.charDelayMs",
            "Per-character delay exceeds 1000ms; replies will stream very slowly",
        );
    }

    report
}
