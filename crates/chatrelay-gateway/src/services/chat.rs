//! Room chat: name registration, per-connection rate limiting, broadcast.
//!
//! A connection starts anonymous. Its first `|name` line registers it in the
//! [`ConnectionRegistry`] and announces the join to everyone. From then on,
//! every line is relayed to all registered connections (sender included),
//! subject to a length limit and a minimum spacing between accepted lines.
//! Lines from anonymous connections are dropped without a reply.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;

use chatrelay_core::clock::{never, Clock};
use chatrelay_core::error::{RelayError, Result};
use chatrelay_core::protocol::line::char_len;
use chatrelay_core::protocol::{outbound, parse_line, CloseReason, Line};

use crate::config::ChatSection;
use crate::dispatch::SessionHandler;
use crate::realtime::{BroadcastReport, ConnectionRegistry, RegisteredUser, SessionRef};
use crate::transport::handshake::HandshakeAttributes;

#[derive(Debug, Clone, Copy)]
pub struct ChatLimits {
    pub max_name_chars: usize,
    pub max_message_chars: usize,
    pub min_interval: TimeDelta,
}

impl Default for ChatLimits {
    fn default() -> Self {
        Self::from(&ChatSection::default())
    }
}

impl From<&ChatSection> for ChatLimits {
    fn from(s: &ChatSection) -> Self {
        Self {
            max_name_chars: s.max_name_chars,
            max_message_chars: s.max_message_chars,
            // validated to at most 60s, so the cast is lossless
            min_interval: TimeDelta::milliseconds(s.min_interval_ms as i64),
        }
    }
}

/// What one inbound text line led to.
#[derive(Debug)]
pub enum Outcome {
    /// Blank line, or chat from a connection that never announced a name.
    Ignored,
    /// Connection was closed for a protocol violation.
    Closed,
    /// Private notice sent to the sender; nothing broadcast, no state changed.
    Rejected(RelayError),
    Broadcast(BroadcastReport),
}

pub struct ChatHandler {
    registry: Arc<ConnectionRegistry>,
    /// connection_id -> last accepted chat line.
    last_accepted: DashMap<String, DateTime<Utc>>,
    clock: Arc<dyn Clock>,
    limits: ChatLimits,
}

impl ChatHandler {
    pub fn new(registry: Arc<ConnectionRegistry>, clock: Arc<dyn Clock>, limits: ChatLimits) -> Self {
        Self {
            registry,
            last_accepted: DashMap::new(),
            clock,
            limits,
        }
    }

    pub fn registry(&self) -> &Arc<ConnectionRegistry> {
        &self.registry
    }

    pub fn limits(&self) -> &ChatLimits {
        &self.limits
    }

    /// Number of connections with live rate state.
    pub fn rate_tracked(&self) -> usize {
        self.last_accepted.len()
    }

    pub fn handle_text(&self, session: &SessionRef, raw: &str) -> Outcome {
        let Some(line) = parse_line(raw) else {
            return Outcome::Ignored;
        };
        match line {
            Line::NameAnnouncement(name) => self.announce(session, name, raw.trim()),
            Line::Chat(text) => self.chat(session, text),
        }
    }

    fn announce(&self, session: &SessionRef, name: &str, line: &str) -> Outcome {
        let len = char_len(name);
        if len == 0 || len > self.limits.max_name_chars {
            let e = RelayError::ProtocolViolation(format!(
                "display name must be 1..={} chars, got {len}",
                self.limits.max_name_chars
            ));
            tracing::warn!(session = %session.id(), error = %e, "closing connection");
            session.close(CloseReason::BadData);
            return Outcome::Closed;
        }

        // Already named: the line is relayed as chat under the stored name.
        if !self.registry.add(session.id(), name, Arc::clone(session)) {
            return self.chat(session, line);
        }
        self.last_accepted.insert(session.id().to_string(), never());

        tracing::info!(session = %session.id(), name = %name, "joined");
        let now = self.clock.now();
        Outcome::Broadcast(self.registry.broadcast(&outbound::joined(&now, name)))
    }

    fn chat(&self, session: &SessionRef, text: &str) -> Outcome {
        let Some(name) = self.registry.name_of(session.id()) else {
            tracing::debug!(session = %session.id(), "chat before name announcement dropped");
            return Outcome::Ignored;
        };

        let now = self.clock.now();
        if let Err(e) = self.admit(session.id(), text, now) {
            tracing::debug!(session = %session.id(), error = %e, "chat rejected");
            if let Some(notice) = e.notice() {
                if let Err(se) = session.send(notice) {
                    tracing::warn!(session = %session.id(), error = %se, "notice delivery failed");
                }
            }
            return Outcome::Rejected(e);
        }

        Outcome::Broadcast(self.registry.broadcast(&outbound::said(&now, &name, text)))
    }

    /// Length and rate checks. Stamps the connection only when both pass.
    fn admit(&self, connection_id: &str, text: &str, now: DateTime<Utc>) -> Result<()> {
        if char_len(text) > self.limits.max_message_chars {
            return Err(RelayError::MessageTooLong);
        }

        let mut last = self
            .last_accepted
            .entry(connection_id.to_string())
            .or_insert_with(never);
        if now - self.limits.min_interval < *last {
            return Err(RelayError::RateLimited);
        }
        *last = now;
        Ok(())
    }

    /// Drop registry entry and rate state together.
    fn forget(&self, session: &SessionRef) -> Option<RegisteredUser> {
        let user = self.registry.remove(session.id());
        self.last_accepted.remove(session.id());
        user
    }

    fn announce_departure(&self, user: RegisteredUser) -> BroadcastReport {
        tracing::info!(session = %user.session.id(), name = %user.display_name, "left");
        let now = self.clock.now();
        self.registry.broadcast(&outbound::left(&now, &user.display_name))
    }

    /// Graceful close. Returns the departure broadcast if the connection was named.
    pub fn handle_close(&self, session: &SessionRef) -> Option<BroadcastReport> {
        let user = self.forget(session)?;
        Some(self.announce_departure(user))
    }

    pub fn handle_transport_error(&self, session: &SessionRef, error: &str) -> Option<BroadcastReport> {
        tracing::error!(session = %session.id(), error = %error, "transport error");
        let user = self.forget(session);
        if session.is_open() {
            session.close(CloseReason::Normal);
        }
        user.map(|u| self.announce_departure(u))
    }
}

impl SessionHandler for ChatHandler {
    fn on_establish(&self, session: &SessionRef, attrs: &HandshakeAttributes) {
        tracing::debug!(session = %session.id(), "connection established");
        if attrs.is_empty() {
            tracing::debug!("no handshake attributes");
        }
        for (key, value) in attrs.iter() {
            tracing::debug!(key = %key, value = %value, "handshake attribute");
        }
    }

    fn on_text(&self, session: &SessionRef, text: &str) {
        let outcome = self.handle_text(session, text);
        tracing::trace!(session = %session.id(), ?outcome, "text handled");
    }

    fn on_close(&self, session: &SessionRef) {
        tracing::debug!(session = %session.id(), "connection closed");
        self.handle_close(session);
    }

    fn on_transport_error(&self, session: &SessionRef, error: &str) {
        self.handle_transport_error(session, error);
    }
}
