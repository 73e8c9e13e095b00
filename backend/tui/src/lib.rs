//! TUI (Terminal User Interface) logic for the chatstream client.
//!
//! Exposes ratatui elements and the app state required to run
//! `chatstream chat`.

pub mod app;
pub mod input;
pub mod render;

pub use app::{AppState, SendRequest};
pub use input::handle_key_event;
pub use render::draw_ui;
