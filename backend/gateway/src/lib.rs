//! chatstream gateway HTTP server.
//!
//! Hosts the mock SSE streaming endpoint and the health check.

pub mod health;
pub mod server;
pub mod sse;

pub use server::{router, start_server, GatewayState};
pub use sse::{reply_stream, Reply, SseRequest};
