use serde::{Deserialize, Serialize};

/// One streamed frame of an assistant reply, as carried in the `data:` field
/// of an SSE record.
///
/// The gateway emits one frame per character of the reply and signals
/// completion by closing the stream; `done` is accepted on the consumer side
/// for forward compatibility with backends that terminate explicitly, but the
/// mock producer never sets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamEvent {
    pub content: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub done: bool,
}

impl StreamEvent {
    /// A single-character content frame.
    pub fn character(ch: char) -> Self {
        Self {
            content: ch.to_string(),
            done: false,
        }
    }

    /// A content frame carrying an arbitrary fragment.
    pub fn fragment(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            done: false,
        }
    }

    /// Parse the JSON payload of one SSE `data:` record.
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_frame_omits_done() {
        let json = serde_json::to_string(&StreamEvent::character('a')).unwrap();
        assert_eq!(json, r#"{"content":"a"}"#);
    }

    #[test]
    fn test_parse_frame_without_done() {
        let ev = StreamEvent::from_json(r#"{"content":"x"}"#).unwrap();
        assert_eq!(ev.content, "x");
        assert!(!ev.done);
    }

    #[test]
    fn test_parse_frame_with_done() {
        let ev = StreamEvent::from_json(r#"{"content":"","done":true}"#).unwrap();
        assert!(ev.done);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(StreamEvent::from_json("data: not json").is_err());
    }

    #[test]
    fn test_multibyte_character_frame() {
        let ev = StreamEvent::character('é');
        let parsed = StreamEvent::from_json(&serde_json::to_string(&ev).unwrap()).unwrap();
        assert_eq!(parsed.content, "é");
    }
}
