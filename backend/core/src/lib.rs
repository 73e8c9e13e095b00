//! Shared types for the chatstream gateway and client.

pub mod error;
pub mod message;
pub mod wire;

pub use error::ChatStreamError;
pub use message::{clock_label, ChatMessage, MessageId, Sender};
pub use wire::StreamEvent;
