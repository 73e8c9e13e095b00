//! Streaming session state machine.
//!
//! One [`StreamSession`] correlates a single user request with the single
//! assistant message it produces. The explicit phase machine replaces the
//! open/message/close/error callback soup: each event is only meaningful in
//! specific phases, and anything else is a logged no-op.

use chatstream_core::{MessageId, StreamEvent};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::state::ChatState;

/// Lifecycle of one streamed exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Created, request not yet dispatched.
    Idle,
    /// Request dispatched, response not yet open.
    Connecting,
    /// Response open; frames append to the session's assistant message.
    Streaming,
    /// Stream ended normally.
    Closed,
    /// Stream ended with a transport failure. No retry.
    Errored,
}

/// What the consumer task reports back to the UI, tagged with the session it
/// belongs to so overlapping sessions stay untangled on one channel.
#[derive(Debug, Clone)]
pub struct SessionEvent {
    pub session: Uuid,
    pub kind: SessionEventKind,
}

#[derive(Debug, Clone)]
pub enum SessionEventKind {
    /// The response stream opened.
    Open,
    /// One decoded wire frame.
    Frame(StreamEvent),
    /// The stream closed normally.
    Closed,
    /// Transport failure; the payload is diagnostic only.
    Failed(String),
}

/// Correlation between one user request and one assistant message.
#[derive(Debug)]
pub struct StreamSession {
    id: Uuid,
    phase: SessionPhase,
    message_id: Option<MessageId>,
}

impl StreamSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            phase: SessionPhase::Idle,
            message_id: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Id of the assistant message this session appends to, once allocated.
    pub fn message_id(&self) -> Option<MessageId> {
        self.message_id
    }

    pub fn is_live(&self) -> bool {
        matches!(self.phase, SessionPhase::Connecting | SessionPhase::Streaming)
    }

    /// Mark the request as dispatched. The typing indicator turns on here,
    /// before the response opens, matching what a user expects to see.
    pub fn begin(&mut self, state: &mut ChatState) {
        if self.phase != SessionPhase::Idle {
            warn!(session = %self.id, phase = ?self.phase, "begin on a non-idle session; ignored");
            return;
        }
        self.phase = SessionPhase::Connecting;
        state.session_started();
    }

    /// Apply one consumer event to this session.
    pub fn apply(&mut self, state: &mut ChatState, kind: SessionEventKind) {
        match kind {
            SessionEventKind::Open => self.on_open(state),
            SessionEventKind::Frame(frame) => self.on_frame(state, &frame),
            SessionEventKind::Closed => self.on_close(state),
            SessionEventKind::Failed(error) => self.on_error(state, &error),
        }
    }

    /// Stream opened: allocate the assistant placeholder this session will
    /// append to. The placeholder is visible (empty) before any content.
    fn on_open(&mut self, state: &mut ChatState) {
        if self.phase != SessionPhase::Connecting {
            warn!(session = %self.id, phase = ?self.phase, "open in unexpected phase; ignored");
            return;
        }
        self.message_id = Some(state.begin_assistant_message());
        self.phase = SessionPhase::Streaming;
        debug!(session = %self.id, message = ?self.message_id, "Session streaming");
    }

    /// Content frame: append to this session's message, nobody else's.
    /// A `done` flag closes the session explicitly.
    fn on_frame(&mut self, state: &mut ChatState, frame: &StreamEvent) {
        if self.phase != SessionPhase::Streaming {
            warn!(session = %self.id, phase = ?self.phase, "frame outside Streaming; dropped");
            return;
        }
        // message_id is always set in Streaming; guard anyway.
        if let Some(id) = self.message_id {
            if !frame.content.is_empty() {
                state.append_to(id, &frame.content);
            }
        }
        if frame.done {
            self.finish(state, SessionPhase::Closed);
        }
    }

    fn on_close(&mut self, state: &mut ChatState) {
        if !self.is_live() {
            warn!(session = %self.id, phase = ?self.phase, "close on a finished session; ignored");
            return;
        }
        self.finish(state, SessionPhase::Closed);
    }

    fn on_error(&mut self, state: &mut ChatState, error: &str) {
        if !self.is_live() {
            warn!(session = %self.id, phase = ?self.phase, "error on a finished session; ignored");
            return;
        }
        warn!(session = %self.id, error, "Stream session failed");
        self.finish(state, SessionPhase::Errored);
    }

    fn finish(&mut self, state: &mut ChatState, phase: SessionPhase) {
        self.phase = phase;
        state.session_finished();
        debug!(session = %self.id, phase = ?self.phase, "Session finished");
    }
}

impl Default for StreamSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(content: &str) -> SessionEventKind {
        SessionEventKind::Frame(StreamEvent::fragment(content))
    }

    fn streaming_session(state: &mut ChatState) -> StreamSession {
        let mut session = StreamSession::new();
        session.begin(state);
        session.apply(state, SessionEventKind::Open);
        session
    }

    #[test]
    fn test_placeholder_appears_empty_on_open() {
        let mut state = ChatState::new();
        let session = streaming_session(&mut state);

        let id = session.message_id().unwrap();
        assert_eq!(state.message(id).unwrap().text, "");
        assert_eq!(session.phase(), SessionPhase::Streaming);
    }

    #[test]
    fn test_frames_accumulate_in_order() {
        let mut state = ChatState::new();
        let mut session = streaming_session(&mut state);

        for ch in ["H", "e", "y"] {
            session.apply(&mut state, frame(ch));
        }
        session.apply(&mut state, SessionEventKind::Closed);

        let id = session.message_id().unwrap();
        assert_eq!(state.message(id).unwrap().text, "Hey");
        assert_eq!(session.phase(), SessionPhase::Closed);
    }

    #[test]
    fn test_done_flag_closes_the_session() {
        let mut state = ChatState::new();
        let mut session = streaming_session(&mut state);

        session.apply(
            &mut state,
            SessionEventKind::Frame(StreamEvent {
                content: "!".into(),
                done: true,
            }),
        );
        assert_eq!(session.phase(), SessionPhase::Closed);
        assert!(!state.is_typing());

        // Late frames after an explicit done are dropped.
        session.apply(&mut state, frame("x"));
        let id = session.message_id().unwrap();
        assert_eq!(state.message(id).unwrap().text, "!");
    }

    #[test]
    fn test_frames_after_close_are_noops() {
        let mut state = ChatState::new();
        let mut session = streaming_session(&mut state);
        session.apply(&mut state, SessionEventKind::Closed);

        session.apply(&mut state, frame("late"));
        let id = session.message_id().unwrap();
        assert_eq!(state.message(id).unwrap().text, "");
    }

    #[test]
    fn test_error_clears_typing_and_keeps_partial_text() {
        let mut state = ChatState::new();
        let mut session = streaming_session(&mut state);
        session.apply(&mut state, frame("par"));
        session.apply(&mut state, SessionEventKind::Failed("connection reset".into()));

        assert_eq!(session.phase(), SessionPhase::Errored);
        assert!(!state.is_typing());
        let id = session.message_id().unwrap();
        assert_eq!(state.message(id).unwrap().text, "par");
    }

    #[test]
    fn test_overlapping_sessions_stay_isolated() {
        let mut state = ChatState::new();
        let mut first = streaming_session(&mut state);
        let mut second = streaming_session(&mut state);
        assert_ne!(first.id(), second.id());
        assert_ne!(first.message_id(), second.message_id());

        first.apply(&mut state, frame("aaa"));
        second.apply(&mut state, frame("zzz"));
        first.apply(&mut state, SessionEventKind::Closed);
        assert!(state.is_typing(), "second session still live");
        second.apply(&mut state, SessionEventKind::Closed);
        assert!(!state.is_typing());

        assert_eq!(state.message(first.message_id().unwrap()).unwrap().text, "aaa");
        assert_eq!(state.message(second.message_id().unwrap()).unwrap().text, "zzz");
    }

    #[test]
    fn test_open_requires_connecting_phase() {
        let mut state = ChatState::new();
        let mut session = StreamSession::new();
        // Open without begin: ignored, nothing allocated.
        session.apply(&mut state, SessionEventKind::Open);
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.message_id().is_none());
        assert!(state.messages().is_empty());
    }
}
