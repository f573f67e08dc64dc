//! Realtime runtime for the chat relay.
//!
//! Session handle abstraction plus the connection registry that owns
//! membership and broadcast fan-out.

pub mod registry;
pub mod session;

pub use registry::{BroadcastReport, ConnectionRegistry, RegisteredUser};
pub use session::{Session, SessionRef};
