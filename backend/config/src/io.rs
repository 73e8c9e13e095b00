//! Config file read/write.

use crate::schema::ChatStreamConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Default config file name within the config directory.
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Resolve the chatstream config directory.
/// Priority: `CHATSTREAM_CONFIG_DIR` env > `~/.chatstream/`
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CHATSTREAM_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".chatstream");
    }
    PathBuf::from(".chatstream")
}

/// Resolve the full path to the main config file.
pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Load and parse the config from disk.
///
/// Returns `Ok(Default::default())` if the file doesn't exist (first run).
pub async fn load_config(path: &Path) -> Result<ChatStreamConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "Config file does not exist; using defaults");
        return Ok(ChatStreamConfig::default());
    }

    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: ChatStreamConfig = serde_yaml::from_str(&raw)
        .with_context(|| format!("Failed to parse config YAML at: {}", path.display()))?;

    info!(path = %path.display(), "Loaded config");
    Ok(config)
}

/// Write config to disk (write to temp file, rename for atomicity).
pub async fn write_config(config: &ChatStreamConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    let yaml =
        serde_yaml::to_string(config).with_context(|| "Failed to serialize config to YAML")?;

    let tmp_path = path.with_extension("yaml.tmp");
    fs::write(&tmp_path, yaml.as_bytes())
        .await
        .with_context(|| format!("Failed to write temp config: {}", tmp_path.display()))?;

    fs::rename(&tmp_path, path)
        .await
        .with_context(|| format!("Failed to rename temp config to: {}", path.display()))?;

    info!(path = %path.display(), "Wrote config");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let config = load_config(Path::new("/definitely/not/here/config.yaml"))
            .await
            .unwrap();
        assert_eq!(config.reply_text(), crate::schema::DEFAULT_REPLY_TEXT);
    }

    #[tokio::test]
    async fn test_write_then_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!("chatstream-cfg-{}", std::process::id()));
        let path = config_file_path(&dir);

        let mut config = ChatStreamConfig::default();
        config.reply = Some(crate::schema::ReplyConfig {
            text: Some("ok".into()),
            char_delay_ms: Some(0),
        });

        write_config(&config, &path).await.unwrap();
        let loaded = load_config(&path).await.unwrap();
        assert_eq!(loaded.reply_text(), "ok");
        assert_eq!(loaded.char_delay_ms(), 0);

        let _ = fs::remove_dir_all(&dir).await;
    }
}
