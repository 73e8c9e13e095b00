//! Keyboard Input Handler
//!
//! Processes crossterm events (Key, Char, Enter) and updates `AppState`.
//! Returns a [`SendRequest`] when Enter submits non-empty input, so the
//! caller can spawn the stream consumer for it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{AppState, SendRequest};

/// Handles a single keyboard event.
pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Option<SendRequest> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.should_quit = true;
            None
        }
        KeyCode::Esc => {
            state.should_quit = true;
            None
        }
        KeyCode::Enter => state.submit_input(),
        KeyCode::Backspace => {
            state.input.pop();
            None
        }
        KeyCode::Up => {
            state.scroll.scroll_up(1);
            None
        }
        KeyCode::Down => {
            state.scroll.scroll_down(1);
            None
        }
        KeyCode::PageUp => {
            state.scroll.scroll_up(10);
            None
        }
        KeyCode::PageDown => {
            state.scroll.scroll_down(10);
            None
        }
        KeyCode::End => {
            state.scroll.scroll_to_bottom();
            None
        }
        KeyCode::Char(c) => {
            state.input.push(c);
            None
        }
        _ => None,
    }
}
