//! Inbound line classification and outbound text shapes.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chrono::{TimeZone, Utc};

use chatrelay_core::clock::format_timestamp;
use chatrelay_core::protocol::line::char_len;
use chatrelay_core::protocol::{outbound, parse_line, CloseReason, Line};
use chatrelay_core::RelayError;

#[test]
fn blank_lines_are_ignored() {
    assert_eq!(parse_line(""), None);
    assert_eq!(parse_line("   \t\n"), None);
}

#[test]
fn prefix_marks_name_announcement() {
    assert_eq!(parse_line("|Alice"), Some(Line::NameAnnouncement("Alice")));
    assert_eq!(parse_line("  |Bob \n"), Some(Line::NameAnnouncement("Bob")));
    // bare prefix parses; the handler rejects the empty name
    assert_eq!(parse_line("|"), Some(Line::NameAnnouncement("")));
}

#[test]
fn everything_else_is_chat() {
    assert_eq!(parse_line(" hello there "), Some(Line::Chat("hello there")));
    assert_eq!(parse_line("a|b"), Some(Line::Chat("a|b")));
}

#[test]
fn lengths_count_characters_not_bytes() {
    assert_eq!(char_len("abc"), 3);
    assert_eq!(char_len("你好世界"), 4);
}

#[test]
fn outbound_lines_carry_timestamp_prefix() {
    let at = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
    let ts = format_timestamp(&at);

    assert_eq!(outbound::joined(&at, "Alice"), format!("{ts} Alice has joined"));
    assert_eq!(outbound::said(&at, "Alice", "hi"), format!("{ts} Alice said: hi"));
    assert_eq!(outbound::left(&at, "Alice"), format!("{ts} Alice has left"));
}

#[test]
fn close_reasons_map_to_ws_codes() {
    assert_eq!(CloseReason::Normal.code(), 1000);
    assert_eq!(CloseReason::BadData.code(), 1007);
    assert_eq!(CloseReason::ServerError.code(), 1011);
    assert_eq!(CloseReason::default(), CloseReason::Normal);
}

#[test]
fn only_recoverable_errors_have_notices() {
    assert!(RelayError::MessageTooLong.notice().is_some());
    assert!(RelayError::RateLimited.notice().is_some());
    assert!(RelayError::QueueFull.notice().is_none());
    assert!(RelayError::ProtocolViolation("x".into()).notice().is_none());

    assert!(RelayError::SessionClosed.is_delivery_failure());
    assert!(!RelayError::RateLimited.is_delivery_failure());
}
