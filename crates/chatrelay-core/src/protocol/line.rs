//! Inbound line parsing (decode once, then dispatch).

/// Leading character that turns a line into a name announcement.
pub const NAME_PREFIX: char = '|';

/// One parsed inbound line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `|<name>`: candidate display name (may be empty or too long; the
    /// handler validates it).
    NameAnnouncement(&'a str),
    /// Ordinary chat text.
    Chat(&'a str),
}

/// Trim surrounding whitespace and classify the line.
///
/// Returns `None` for blank input, which is ignored entirely.
pub fn parse_line(raw: &str) -> Option<Line<'_>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.strip_prefix(NAME_PREFIX) {
        Some(name) => Some(Line::NameAnnouncement(name)),
        None => Some(Line::Chat(trimmed)),
    }
}

/// Length in characters, the unit every chat limit is expressed in.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
