//! Chat line protocol.
//!
//! Inbound traffic is plain text, one message per frame:
//! - `|<name>` announces the sender's display name.
//! - anything else is a chat line.
//!
//! Outbound traffic is plain text as well, prefixed with a local timestamp.
//! Parsing is panic-free and borrows from the inbound frame.

pub mod close;
pub mod line;
pub mod outbound;

pub use close::CloseReason;
pub use line::{parse_line, Line, NAME_PREFIX};
