//! chatstream client: stream consumption and conversation state.
//!
//! The pieces compose as: [`consumer::start_sse_consumer`] pumps decoded
//! events over a channel; the UI applies each event to a [`StreamSession`],
//! which mutates the shared [`ChatState`] keyed by message id.

pub mod consumer;
pub mod decode;
pub mod scroll;
pub mod session;
pub mod state;

pub use consumer::start_sse_consumer;
pub use decode::SseDecoder;
pub use scroll::{ScrollState, SCROLL_BUTTON_THRESHOLD};
pub use session::{SessionEvent, SessionEventKind, SessionPhase, StreamSession};
pub use state::ChatState;
