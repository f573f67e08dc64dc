//! Shared error type across chatrelay crates.

use thiserror::Error;

/// Private notice sent when a chat message exceeds the length limit.
pub const NOTICE_MESSAGE_TOO_LONG: &str = "message too long (only you can see this)";

/// Private notice sent when a connection talks faster than the rate limit allows.
pub const NOTICE_RATE_LIMITED: &str = "sending too frequently (only you can see this)";

/// Shared result type.
pub type Result<T> = std::result::Result<T, RelayError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Client broke the line protocol (e.g. an invalid display name).
    #[error("protocol violation: {0}")]
    ProtocolViolation(String),
    #[error("message too long")]
    MessageTooLong,
    #[error("rate limited")]
    RateLimited,
    /// Recipient session is no longer open.
    #[error("session closed")]
    SessionClosed,
    /// Recipient outbound queue is full.
    #[error("outbound queue full")]
    QueueFull,
    #[error("transport: {0}")]
    Transport(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl RelayError {
    /// Private notice text for errors that are reported back to the sender only.
    ///
    /// Returns `None` for errors that are never shown to a client.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            RelayError::MessageTooLong => Some(NOTICE_MESSAGE_TOO_LONG),
            RelayError::RateLimited => Some(NOTICE_RATE_LIMITED),
            _ => None,
        }
    }

    /// Delivery failures are isolated to one recipient and never abort a broadcast.
    pub fn is_delivery_failure(&self) -> bool {
        matches!(self, RelayError::SessionClosed | RelayError::QueueFull)
    }
}
