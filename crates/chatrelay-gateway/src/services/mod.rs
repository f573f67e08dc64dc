//! Built-in session handlers.

pub mod chat;

pub use chat::{ChatHandler, ChatLimits, Outcome};
