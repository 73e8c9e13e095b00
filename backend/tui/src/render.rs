//! TUI Rendering
//!
//! Translates `AppState` into Ratatui `Widget`s and draws to the terminal
//! frame. Also reconciles the scroll viewport with the rendered content
//! height, since only the renderer knows the pane dimensions.

use chatstream_core::Sender;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::AppState;

/// Main draw function.
pub fn draw_ui(f: &mut Frame, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(3),    // Chat Messages
            Constraint::Length(3), // Input Box
        ])
        .split(f.size());

    let lines = message_lines(state);

    // Inner height excludes the two border rows.
    state
        .scroll
        .set_viewport_height(chunks[0].height.saturating_sub(2));
    state.scroll.set_content_height(lines.len() as u16);

    let title = if state.scroll.show_scroll_button() {
        "Chat — ↓ newer messages below (End)"
    } else {
        "Chat"
    };
    let messages_widget = Paragraph::new(lines.join("\n"))
        .block(Block::default().title(title).borders(Borders::ALL))
        .scroll((state.scroll.scroll_top(), 0));
    f.render_widget(messages_widget, chunks[0]);

    let input_widget = Paragraph::new(state.input.as_str())
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .title("Message (Enter to send, Esc to quit)")
                .borders(Borders::ALL),
        );
    f.render_widget(input_widget, chunks[1]);
}

/// One line per message, plus a typing row while any session streams.
pub fn message_lines(state: &AppState) -> Vec<String> {
    let mut lines: Vec<String> = state
        .chat
        .messages()
        .iter()
        .map(|message| {
            let who = match message.sender {
                Sender::User => "You",
                Sender::Assistant => state.assistant_name.as_str(),
            };
            format!("[{}] {}: {}", message.time, who, message.text)
        })
        .collect();

    if state.chat.is_typing() {
        lines.push(format!("{} is typing…", state.assistant_name));
    }
    lines
}
