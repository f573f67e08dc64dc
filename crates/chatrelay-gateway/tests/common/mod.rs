//! Shared test doubles.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chatrelay_core::error::{RelayError, Result};
use chatrelay_core::protocol::CloseReason;
use chatrelay_gateway::realtime::{Session, SessionRef};

/// Session that records everything sent to it.
pub struct RecordingSession {
    id: String,
    sent: Mutex<Vec<String>>,
    attempts: AtomicUsize,
    closed: Mutex<Option<CloseReason>>,
    fail_sends: AtomicBool,
}

impl RecordingSession {
    pub fn new(id: &str) -> Arc<Self> {
        Arc::new(Self {
            id: id.to_string(),
            sent: Mutex::new(Vec::new()),
            attempts: AtomicUsize::new(0),
            closed: Mutex::new(None),
            fail_sends: AtomicBool::new(false),
        })
    }

    /// Every send fails with `QueueFull` from now on.
    pub fn failing(id: &str) -> Arc<Self> {
        let s = Self::new(id);
        s.fail_sends.store(true, Ordering::SeqCst);
        s
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.sent.lock().unwrap().last().cloned()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn closed_with(&self) -> Option<CloseReason> {
        *self.closed.lock().unwrap()
    }

    pub fn handle(self: &Arc<Self>) -> SessionRef {
        self.clone()
    }
}

impl Session for RecordingSession {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_open(&self) -> bool {
        self.closed.lock().unwrap().is_none()
    }

    fn send(&self, text: &str) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(RelayError::QueueFull);
        }
        if !self.is_open() {
            return Err(RelayError::SessionClosed);
        }
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn close(&self, reason: CloseReason) {
        let mut closed = self.closed.lock().unwrap();
        if closed.is_none() {
            *closed = Some(reason);
        }
    }
}
