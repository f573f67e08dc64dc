//! Dispatcher module exports.
//!
//! Re-exports the session handler trait so transports can depend on this
//! module directly.

pub mod handler;

pub use handler::SessionHandler;
