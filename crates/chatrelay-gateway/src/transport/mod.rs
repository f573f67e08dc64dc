//! Transport layer (WebSocket).
//!
//! Exposes the WS upgrade handler, the `Session` implementation backed by a
//! per-connection outbound queue, handshake attribute capture, and the idle
//! deadline.

pub mod handshake;
pub mod idle;
pub mod session;
pub mod ws;
