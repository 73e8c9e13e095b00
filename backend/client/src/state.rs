//! In-memory conversation state.
//!
//! Owns the ordered message list and allocates message ids. All mutation is
//! keyed by [`MessageId`], never by list position, so concurrent sessions can
//! safely target their own messages.

use chatstream_core::{ChatMessage, MessageId};

/// The client's view of one conversation.
#[derive(Debug, Default)]
pub struct ChatState {
    messages: Vec<ChatMessage>,
    next_id: u64,
    /// Number of sessions currently streaming. The typing indicator derives
    /// from this count so overlapping sessions cannot clear each other.
    live_sessions: usize,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
            live_sessions: 0,
        }
    }

    /// A conversation seeded with the assistant greeting.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let mut state = Self::new();
        let id = state.allocate_id();
        state.messages.push(ChatMessage::assistant(id, greeting));
        state
    }

    fn allocate_id(&mut self) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a user message. Empty or whitespace-only input is rejected and
    /// creates nothing.
    pub fn push_user_message(&mut self, input: &str) -> Option<MessageId> {
        if input.trim().is_empty() {
            return None;
        }
        let id = self.allocate_id();
        self.messages.push(ChatMessage::user(id, input));
        Some(id)
    }

    /// Append an empty assistant placeholder and return its id. This is the
    /// append target for one streaming session.
    pub fn begin_assistant_message(&mut self) -> MessageId {
        let id = self.allocate_id();
        self.messages.push(ChatMessage::assistant_placeholder(id));
        id
    }

    /// Append a fragment to the message with the given id. Unrelated messages
    /// are left untouched. Returns false if no message has that id.
    pub fn append_to(&mut self, id: MessageId, fragment: &str) -> bool {
        match self.messages.iter_mut().find(|m| m.id == id) {
            Some(message) => {
                message.append(fragment);
                true
            }
            None => false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn message(&self, id: MessageId) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// True while any session is streaming.
    pub fn is_typing(&self) -> bool {
        self.live_sessions > 0
    }

    pub(crate) fn session_started(&mut self) {
        self.live_sessions += 1;
    }

    pub(crate) fn session_finished(&mut self) {
        self.live_sessions = self.live_sessions.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatstream_core::Sender;

    #[test]
    fn test_greeting_is_first_message() {
        let state = ChatState::with_greeting("Hello!");
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].sender, Sender::Assistant);
        assert_eq!(state.messages()[0].text, "Hello!");
    }

    #[test]
    fn test_blank_input_creates_no_message() {
        let mut state = ChatState::new();
        assert!(state.push_user_message("").is_none());
        assert!(state.push_user_message("   \t\n").is_none());
        assert!(state.messages().is_empty());
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut state = ChatState::with_greeting("hi");
        let a = state.push_user_message("one").unwrap();
        let b = state.begin_assistant_message();
        let c = state.push_user_message("two").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_append_is_keyed_by_id_not_position() {
        let mut state = ChatState::new();
        let first = state.begin_assistant_message();
        let second = state.begin_assistant_message();
        assert!(state.append_to(second, "B"));
        assert!(state.append_to(first, "A"));
        assert_eq!(state.message(first).unwrap().text, "A");
        assert_eq!(state.message(second).unwrap().text, "B");
    }

    #[test]
    fn test_append_to_unknown_id_is_rejected() {
        let mut state = ChatState::new();
        assert!(!state.append_to(MessageId(99), "x"));
    }

    #[test]
    fn test_typing_tracks_live_session_count() {
        let mut state = ChatState::new();
        assert!(!state.is_typing());
        state.session_started();
        state.session_started();
        state.session_finished();
        assert!(state.is_typing());
        state.session_finished();
        assert!(!state.is_typing());
        // Underflow guard.
        state.session_finished();
        assert!(!state.is_typing());
    }
}
