//! chatrelay core: transport-agnostic line protocol, error types, and clock.
//!
//! This crate defines the text contracts and error surface shared by the
//! gateway and its tests. It carries no transport or runtime dependencies so
//! the chat rules can be exercised without a socket.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `RelayError`/`Result` so a malformed message
//! from one client never takes the process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod clock;
pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{RelayError, Result};
