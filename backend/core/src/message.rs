use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Identifier of a chat message within one conversation.
///
/// Ids are allocated as a monotonically increasing sequence by the owning
/// `ChatState`; they are never reused, so an id stays a stable handle to one
/// message even while other messages are appended around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

/// One entry in the conversation.
///
/// `text` accumulates in place while an assistant reply streams in; nothing
/// else on the message mutates after creation. `liked` is stored but carries
/// no behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    #[serde(default)]
    pub liked: bool,
    /// Formatted clock label (e.g. "10:24 AM"), fixed at creation time.
    pub time: String,
}

impl ChatMessage {
    /// A user-authored message with its full text known up front.
    pub fn user(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender: Sender::User,
            liked: false,
            time: clock_label(Local::now()),
        }
    }

    /// An empty assistant message, the append target for a streaming reply.
    pub fn assistant_placeholder(id: MessageId) -> Self {
        Self {
            id,
            text: String::new(),
            sender: Sender::Assistant,
            liked: false,
            time: clock_label(Local::now()),
        }
    }

    /// A fully-formed assistant message (used for the seeded greeting).
    pub fn assistant(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::assistant_placeholder(id)
        }
    }

    pub fn append(&mut self, fragment: &str) {
        self.text.push_str(fragment);
    }
}

/// Format a timestamp as the 12-hour clock label shown next to each bubble.
pub fn clock_label(at: DateTime<Local>) -> String {
    at.format("%I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_construction() {
        let msg = ChatMessage::user(MessageId(2), "Hi");
        assert_eq!(msg.id, MessageId(2));
        assert_eq!(msg.text, "Hi");
        assert_eq!(msg.sender, Sender::User);
        assert!(!msg.liked);
        assert!(!msg.time.is_empty());
    }

    #[test]
    fn test_assistant_placeholder_is_empty() {
        let msg = ChatMessage::assistant_placeholder(MessageId(3));
        assert_eq!(msg.sender, Sender::Assistant);
        assert!(msg.text.is_empty());
    }

    #[test]
    fn test_append_accumulates() {
        let mut msg = ChatMessage::assistant_placeholder(MessageId(1));
        msg.append("H");
        msg.append("i");
        msg.append("!");
        assert_eq!(msg.text, "Hi!");
    }

    #[test]
    fn test_sender_serialization() {
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Sender::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn test_message_id_ordering() {
        assert!(MessageId(1) < MessageId(2));
        assert_eq!(MessageId(7).to_string(), "#7");
    }

    #[test]
    fn test_clock_label_format() {
        use chrono::TimeZone;
        let at = Local.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap();
        assert_eq!(clock_label(at), "10:00 AM");
        let at = Local.with_ymd_and_hms(2024, 1, 5, 16, 7, 0).unwrap();
        assert_eq!(clock_label(at), "04:07 PM");
    }
}
