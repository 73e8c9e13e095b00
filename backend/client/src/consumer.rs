//! SSE stream consumer.
//!
//! Opens the streaming request against the gateway and forwards decoded
//! events to the UI over an mpsc channel, tagged with the session id. The
//! consumer trusts producer pacing: frames append as they arrive, with no
//! client-side re-chunking or re-delaying.

use anyhow::Result;
use chatstream_core::{ChatStreamError, StreamEvent};
use futures_util::StreamExt;
use reqwest::Client;
use tokio::sync::mpsc::Sender;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::decode::SseDecoder;
use crate::session::{SessionEvent, SessionEventKind};

/// Connect to the gateway and pump one reply stream into `tx`.
///
/// Every outcome is reported on the channel: `Open` once the response is
/// accepted, one `Frame` per decoded record, then exactly one of `Closed` or
/// `Failed`. Malformed records are dropped with a warning and the stream
/// continues. A frame with `done` set ends the session without waiting for
/// transport close.
pub async fn start_sse_consumer(
    base_url: &str,
    session: Uuid,
    input: &str,
    tx: Sender<SessionEvent>,
) -> Result<()> {
    let send = |kind: SessionEventKind| {
        let tx = tx.clone();
        async move {
            // The UI hanging up mid-stream is not an error worth surfacing.
            tx.send(SessionEvent { session, kind }).await.ok();
        }
    };

    let client = Client::new();
    let url = format!("{}/api/sse", base_url.trim_end_matches('/'));

    let response = match client
        .post(&url)
        .json(&serde_json::json!({ "input": input }))
        .send()
        .await
    {
        Ok(response) => response,
        Err(err) => {
            let err = ChatStreamError::Transport(err.to_string());
            send(SessionEventKind::Failed(err.to_string())).await;
            return Err(err.into());
        }
    };

    let status = response.status();
    if !status.is_success() {
        let err = ChatStreamError::BadStatus(status.as_u16());
        send(SessionEventKind::Failed(err.to_string())).await;
        return Err(err.into());
    }

    send(SessionEventKind::Open).await;
    debug!(session = %session, url = %url, "SSE stream open");

    let mut stream = response.bytes_stream();
    let mut decoder = SseDecoder::new();

    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(err) => {
                let err = ChatStreamError::Transport(err.to_string());
                send(SessionEventKind::Failed(err.to_string())).await;
                return Err(err.into());
            }
        };

        for payload in decoder.feed(&chunk) {
            match StreamEvent::from_json(&payload) {
                Ok(frame) => {
                    let done = frame.done;
                    send(SessionEventKind::Frame(frame)).await;
                    if done {
                        send(SessionEventKind::Closed).await;
                        return Ok(());
                    }
                }
                Err(err) => {
                    let err = ChatStreamError::MalformedFrame(err.to_string());
                    warn!(session = %session, error = %err, payload = %payload, "Dropping malformed stream frame");
                }
            }
        }
    }

    send(SessionEventKind::Closed).await;
    debug!(session = %session, "SSE stream closed");
    Ok(())
}
