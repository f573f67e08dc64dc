use std::sync::Arc;

use chatrelay_core::error::Result;
use chatrelay_core::protocol::CloseReason;

/// One client's live channel as seen by handlers.
///
/// Implementations must be cheap to call from any task: `send` enqueues and
/// returns immediately, it never waits on the peer.
pub trait Session: Send + Sync {
    /// Stable for the lifetime of the connection.
    fn id(&self) -> &str;
    fn is_open(&self) -> bool;
    /// Fails with `SessionClosed` or `QueueFull`.
    fn send(&self, text: &str) -> Result<()>;
    /// Request the transport to close the connection. Only the first reason sticks.
    fn close(&self, reason: CloseReason);
}

/// Shared session handle stored in the registry.
pub type SessionRef = Arc<dyn Session>;
