//! Structured logging setup for chatstream.

pub mod logger;

pub use logger::{init_file_logging, init_logging};
