//! Mock streaming endpoint (`POST /api/sse`).
//!
//! Emits a configured reply string as one SSE `data:` frame per character,
//! paced by a fixed inter-character delay, then closes the stream. The
//! request body is accepted but never consulted for generation; this is a
//! stand-in for a real backend.

use axum::extract::State;
use axum::response::sse::{Event, Sse};
use axum::Json;
use chatstream_core::StreamEvent;
use futures::stream::{self, Stream};
use futures::StreamExt;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

use crate::server::GatewayState;

/// The reply the producer streams, with its pacing.
#[derive(Debug, Clone)]
pub struct Reply {
    pub text: String,
    pub char_delay: Duration,
}

impl Reply {
    pub fn from_config(config: &chatstream_config::ChatStreamConfig) -> Self {
        Self {
            text: config.reply_text(),
            char_delay: Duration::from_millis(config.char_delay_ms()),
        }
    }
}

/// Request body for `POST /api/sse`. The `input` field is logged only.
#[derive(Debug, Deserialize)]
pub struct SseRequest {
    #[serde(default)]
    pub input: String,
}

/// Yield one `StreamEvent` per character of the reply, in order, sleeping
/// the configured delay between consecutive frames.
///
/// The stream is finite and holds nothing beyond its position, so dropping
/// it mid-flight (peer disconnect) releases everything immediately. No
/// terminal `done` frame is emitted; completion is signaled by stream close.
pub fn reply_stream(reply: Reply) -> impl Stream<Item = StreamEvent> {
    let chars: Vec<char> = reply.text.chars().collect();
    let delay = reply.char_delay;

    stream::unfold((chars, 0usize), move |(chars, idx)| async move {
        if idx >= chars.len() {
            return None;
        }
        if idx > 0 && !delay.is_zero() {
            sleep(delay).await;
        }
        let frame = StreamEvent::character(chars[idx]);
        Some((frame, (chars, idx + 1)))
    })
}

/// Handler for `POST /api/sse`.
pub async fn stream_chat(
    State(state): State<GatewayState>,
    Json(request): Json<SseRequest>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    info!(input_len = request.input.len(), "Opening reply stream");

    let stream =
        reply_stream(state.reply.clone()).map(|frame| Event::default().json_data(&frame));

    Sse::new(stream)
}
