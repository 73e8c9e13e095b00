//! The `chatstream chat` terminal event loop.
//!
//! Single cooperative loop: drain consumer events, redraw, poll the
//! keyboard. Sends spawn one consumer task per session; all tasks report
//! back over the same channel, tagged with their session id.

use std::io::Stdout;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::debug;

use chatstream_client::{start_sse_consumer, SessionEvent};
use chatstream_config::ChatStreamConfig;
use chatstream_tui::{draw_ui, handle_key_event, AppState};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub async fn run_chat(base_url: String, config: &ChatStreamConfig) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, base_url, config).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn event_loop(terminal: &mut Term, base_url: String, config: &ChatStreamConfig) -> Result<()> {
    let mut app = AppState::new(config.greeting(), config.assistant_name());
    let (tx, mut rx) = mpsc::channel::<SessionEvent>(256);

    loop {
        while let Ok(session_event) = rx.try_recv() {
            app.apply_session_event(session_event);
        }

        terminal.draw(|f| draw_ui(f, &mut app))?;

        if event::poll(Duration::from_millis(30))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(request) = handle_key_event(key, &mut app) {
                        let tx = tx.clone();
                        let url = base_url.clone();
                        tokio::spawn(async move {
                            let outcome =
                                start_sse_consumer(&url, request.session, &request.input, tx)
                                    .await;
                            if let Err(err) = outcome {
                                // Already reported on the channel as Failed.
                                debug!(error = %err, "Consumer task ended with error");
                            }
                        });
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn setup_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
