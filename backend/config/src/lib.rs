//! `chatstream-config` — chatstream runtime configuration management.
//!
//! Provides:
//! - Typed config schema (gateway, reply, chat, logging)
//! - YAML read/write
//! - `${ENV_VAR}` substitution
//! - Validation with warnings surfaced at load time

pub mod env;
pub mod io;
pub mod schema;
pub mod validation;

// Re-export most-used types at crate root.
pub use env::{resolve_env_vars, resolve_env_vars_with, MissingEnvVarError};
pub use io::{config_dir, config_file_path, load_config, write_config};
pub use schema::{
    ChatConfig, ChatStreamConfig, GatewayConfig, LoggingConfig, ReplyConfig,
    DEFAULT_CHAR_DELAY_MS, DEFAULT_GREETING, DEFAULT_PORT, DEFAULT_REPLY_TEXT,
};
pub use validation::{validate, ConfigValidationError, ValidationReport};

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// Load, apply env substitution, and validate a config file.
///
/// This is the main entry point for loading a config at runtime.
pub async fn load_and_prepare(path: &Path) -> Result<ChatStreamConfig> {
    let raw_config = load_config(path).await?;

    // Serialize to Value for the env substitution pass.
    let value: Value = serde_json::to_value(&raw_config)
        .context("Failed to serialize config for processing")?;

    let value = resolve_env_vars(&value).context("Failed to resolve env vars in config")?;

    let config: ChatStreamConfig =
        serde_json::from_value(value).context("Failed to deserialize config after processing")?;

    let report = validate(&config);
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    for error in &report.errors {
        tracing::error!(path = %error.path, message = %error.message, "Config error");
    }

    Ok(config)
}
