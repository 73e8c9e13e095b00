use thiserror::Error;

/// Top-level error type shared by the gateway and the client.
#[derive(Debug, Error)]
pub enum ChatStreamError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("gateway returned status {0}")]
    BadStatus(u16),

    #[error("malformed stream frame: {0}")]
    MalformedFrame(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
