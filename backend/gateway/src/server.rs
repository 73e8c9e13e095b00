//! Gateway HTTP server and routing.

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::health;
use crate::sse::{self, Reply};

/// Application state shared across routes.
#[derive(Clone)]
pub struct GatewayState {
    /// The canned reply and its pacing; each request streams its own copy.
    pub reply: Reply,
}

impl GatewayState {
    pub fn new(reply: Reply) -> Self {
        Self { reply }
    }
}

/// Build the gateway router. Split out from [`start_server`] so tests can
/// drive it without binding a socket.
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/api/sse", post(sse::stream_chat))
        .route("/api/health", get(health::health))
        .with_state(state)
}

/// Start the gateway HTTP server.
#[instrument(skip(state))]
pub async fn start_server(addr: SocketAddr, state: GatewayState) -> Result<()> {
    let app = router(state);

    info!("Gateway HTTP server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
