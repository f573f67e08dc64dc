//! chatrelay gateway library entry.
//!
//! This crate wires the transport, connection registry, and chat handler into
//! a WebSocket chat server. It is consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod dispatch;
pub mod ops;
pub mod realtime;
pub mod router;
pub mod services;
pub mod transport;
