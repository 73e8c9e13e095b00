//! chatstream runtime configuration schema.
//!
//! Typed for serde YAML deserialization. Every section is optional in the
//! file; accessors fill in defaults so the rest of the workspace never deals
//! with partially-populated config.

use serde::{Deserialize, Serialize};

/// The canned assistant reply the mock gateway streams back for every request.
pub const DEFAULT_REPLY_TEXT: &str = "I'd be happy to help with your project! \
Could you tell me more about what kind of project you're working on? \
Is it a design project, writing, coding, or something else?";

/// Greeting seeded into the message list before any exchange.
pub const DEFAULT_GREETING: &str =
    "Hi there! I'm your AI assistant. How can I help you today?";

/// Delay between consecutive streamed characters, in milliseconds.
pub const DEFAULT_CHAR_DELAY_MS: u64 = 30;

/// Default gateway port.
pub const DEFAULT_PORT: u16 = 4015;

/// Root configuration for chatstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatStreamConfig {
    /// Gateway server configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<GatewayConfig>,

    /// Streamed reply configuration (text and pacing)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<ReplyConfig>,

    /// Client-side chat presentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat: Option<ChatConfig>,

    /// Logging configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

/// What the mock producer streams, and how fast.
///
/// Injectable so tests can use short deterministic strings and zero delay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Tracing filter directive (e.g. "info", "chatstream_gateway=debug")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Directory for rolling NDJSON log files; console-only when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

impl ChatStreamConfig {
    pub fn bind_address(&self) -> String {
        self.gateway
            .as_ref()
            .and_then(|g| g.bind.clone())
            .unwrap_or_else(|| "127.0.0.1".to_string())
    }

    pub fn port(&self) -> u16 {
        self.gateway
            .as_ref()
            .and_then(|g| g.port)
            .unwrap_or(DEFAULT_PORT)
    }

    pub fn reply_text(&self) -> String {
        self.reply
            .as_ref()
            .and_then(|r| r.text.clone())
            .unwrap_or_else(|| DEFAULT_REPLY_TEXT.to_string())
    }

    pub fn char_delay_ms(&self) -> u64 {
        self.reply
            .as_ref()
            .and_then(|r| r.char_delay_ms)
            .unwrap_or(DEFAULT_CHAR_DELAY_MS)
    }

    pub fn greeting(&self) -> String {
        self.chat
            .as_ref()
            .and_then(|c| c.greeting.clone())
            .unwrap_or_else(|| DEFAULT_GREETING.to_string())
    }

    pub fn assistant_name(&self) -> String {
        self.chat
            .as_ref()
            .and_then(|c| c.assistant_name.clone())
            .unwrap_or_else(|| "Assistant".to_string())
    }

    pub fn log_level(&self) -> String {
        self.logging
            .as_ref()
            .and_then(|l| l.level.clone())
            .unwrap_or_else(|| "info".to_string())
    }

    pub fn log_dir(&self) -> Option<String> {
        self.logging.as_ref().and_then(|l| l.dir.clone())
    }
}
