use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use chatrelay_core::error::RelayError;

use crate::realtime::session::SessionRef;

/// A named connection.
#[derive(Clone)]
pub struct RegisteredUser {
    pub display_name: String,
    pub session: SessionRef,
}

/// Result of one fan-out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    /// Open recipients in the snapshot (one delivery attempt each).
    pub attempted: usize,
    pub failed: usize,
    /// Already closed when the fan-out reached them; not sent to.
    pub skipped: usize,
}

impl BroadcastReport {
    pub fn delivered(&self) -> usize {
        self.attempted - self.failed
    }
}

/// Connection registry: `connection_id -> RegisteredUser`.
///
/// Built once per process (or per test) and shared as `Arc<ConnectionRegistry>`.
#[derive(Default)]
pub struct ConnectionRegistry {
    users: DashMap<String, RegisteredUser>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    /// First writer wins: a second `add` for the same id is ignored.
    /// Returns `true` when the entry was inserted.
    pub fn add(&self, connection_id: &str, display_name: &str, session: SessionRef) -> bool {
        match self.users.entry(connection_id.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(v) => {
                v.insert(RegisteredUser {
                    display_name: display_name.to_string(),
                    session,
                });
                true
            }
        }
    }

    pub fn name_of(&self, connection_id: &str) -> Option<String> {
        self.users
            .get(connection_id)
            .map(|u| u.value().display_name.clone())
    }

    pub fn contains(&self, connection_id: &str) -> bool {
        self.users.contains_key(connection_id)
    }

    pub fn remove(&self, connection_id: &str) -> Option<RegisteredUser> {
        self.users.remove(connection_id).map(|(_, user)| user)
    }

    /// Point-in-time snapshot of every registered session. Order is unspecified.
    pub fn list_all(&self) -> Vec<SessionRef> {
        self.users
            .iter()
            .map(|u| Arc::clone(&u.value().session))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Best-effort fan-out to a snapshot of all registered sessions.
    ///
    /// Each open recipient is tried independently; failures are logged and
    /// counted, never propagated. Sessions already closed are skipped. Shard
    /// locks are released before the first send.
    pub fn broadcast(&self, text: &str) -> BroadcastReport {
        let mut report = BroadcastReport::default();

        for session in self.list_all() {
            if !session.is_open() {
                report.skipped += 1;
                tracing::debug!(session = %session.id(), "broadcast skipped closed session");
                continue;
            }
            report.attempted += 1;
            match session.send(text) {
                Ok(()) => {}
                // lost the race with a close; routine
                Err(e @ RelayError::SessionClosed) => {
                    report.failed += 1;
                    tracing::debug!(session = %session.id(), error = %e, "broadcast delivery failed");
                }
                Err(e) => {
                    report.failed += 1;
                    tracing::warn!(session = %session.id(), error = %e, "broadcast delivery failed");
                }
            }
        }

        tracing::debug!(
            attempted = report.attempted,
            failed = report.failed,
            skipped = report.skipped,
            "broadcast done"
        );
        report
    }
}
