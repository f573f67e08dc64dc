//! Outbound text builders.
//!
//! Every broadcast line is `"<timestamp> <body>"`, where the timestamp comes
//! from [`crate::clock::format_timestamp`].

use chrono::{DateTime, Utc};

use crate::clock::format_timestamp;

fn stamped(at: &DateTime<Utc>, body: std::fmt::Arguments<'_>) -> String {
    format!("{} {}", format_timestamp(at), body)
}

/// `"<ts> <name> has joined"`
pub fn joined(at: &DateTime<Utc>, name: &str) -> String {
    stamped(at, format_args!("{name} has joined"))
}

/// `"<ts> <name> said: <text>"`
pub fn said(at: &DateTime<Utc>, name: &str, text: &str) -> String {
    stamped(at, format_args!("{name} said: {text}"))
}

/// `"<ts> <name> has left"`
pub fn left(at: &DateTime<Utc>, name: &str) -> String {
    stamped(at, format_args!("{name} has left"))
}
