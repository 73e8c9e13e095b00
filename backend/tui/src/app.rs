//! TUI App State
//!
//! Top-level state for the terminal UI: the conversation, the input buffer,
//! scroll position, and every live streaming session keyed by id.

use std::collections::HashMap;

use chatstream_client::{ChatState, ScrollState, SessionEvent, StreamSession};
use tracing::warn;
use uuid::Uuid;

/// A send the UI wants dispatched: spawn a consumer for this session/input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    pub session: Uuid,
    pub input: String,
}

pub struct AppState {
    pub chat: ChatState,
    pub scroll: ScrollState,
    pub input: String,
    pub assistant_name: String,
    pub should_quit: bool,
    sessions: HashMap<Uuid, StreamSession>,
}

impl AppState {
    pub fn new(greeting: impl Into<String>, assistant_name: impl Into<String>) -> Self {
        Self {
            chat: ChatState::with_greeting(greeting),
            scroll: ScrollState::new(),
            input: String::new(),
            assistant_name: assistant_name.into(),
            should_quit: false,
            sessions: HashMap::new(),
        }
    }

    /// Take the current input buffer and turn it into a user message plus a
    /// new streaming session. Blank input is dropped and produces nothing.
    pub fn submit_input(&mut self) -> Option<SendRequest> {
        let input = self.input.trim().to_string();
        if self.chat.push_user_message(&self.input).is_none() {
            self.input.clear();
            return None;
        }
        self.input.clear();

        let mut session = StreamSession::new();
        session.begin(&mut self.chat);
        let id = session.id();
        self.sessions.insert(id, session);

        self.scroll.scroll_to_bottom();
        Some(SendRequest { session: id, input })
    }

    /// Apply one consumer event to the session it belongs to, then follow
    /// the newest content.
    pub fn apply_session_event(&mut self, event: SessionEvent) {
        match self.sessions.get_mut(&event.session) {
            Some(session) => session.apply(&mut self.chat, event.kind),
            None => warn!(session = %event.session, "Event for unknown session; dropped"),
        }
        self.scroll.scroll_to_bottom();
    }

    pub fn session(&self, id: Uuid) -> Option<&StreamSession> {
        self.sessions.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatstream_client::{SessionEventKind, SessionPhase};
    use chatstream_core::StreamEvent;

    fn app() -> AppState {
        AppState::new("Welcome!", "Assistant")
    }

    #[test]
    fn test_submit_blank_input_does_nothing() {
        let mut state = app();
        state.input = "   ".into();
        assert!(state.submit_input().is_none());
        assert_eq!(state.chat.messages().len(), 1);
        assert!(!state.chat.is_typing());
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_submit_creates_message_and_session() {
        let mut state = app();
        state.input = "Hi".into();
        let request = state.submit_input().unwrap();
        assert_eq!(request.input, "Hi");
        assert_eq!(state.chat.messages().len(), 2);
        assert!(state.chat.is_typing());
        assert_eq!(
            state.session(request.session).unwrap().phase(),
            SessionPhase::Connecting
        );
    }

    #[test]
    fn test_events_route_to_their_session() {
        let mut state = app();
        state.input = "Hi".into();
        let request = state.submit_input().unwrap();

        state.apply_session_event(SessionEvent {
            session: request.session,
            kind: SessionEventKind::Open,
        });
        state.apply_session_event(SessionEvent {
            session: request.session,
            kind: SessionEventKind::Frame(StreamEvent::fragment("Yo")),
        });
        state.apply_session_event(SessionEvent {
            session: request.session,
            kind: SessionEventKind::Closed,
        });

        let session = state.session(request.session).unwrap();
        assert_eq!(session.phase(), SessionPhase::Closed);
        let id = session.message_id().unwrap();
        assert_eq!(state.chat.message(id).unwrap().text, "Yo");
    }

    #[test]
    fn test_event_for_unknown_session_is_dropped() {
        let mut state = app();
        state.apply_session_event(SessionEvent {
            session: Uuid::new_v4(),
            kind: SessionEventKind::Open,
        });
        assert_eq!(state.chat.messages().len(), 1);
    }
}
