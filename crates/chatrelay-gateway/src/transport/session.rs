//! `Session` backed by a WebSocket task.
//!
//! Handlers never touch the socket. `send` pushes into the bounded outbound
//! queue drained by the session loop; `close` records a reason and wakes the
//! loop, which writes the close frame.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use tokio::sync::{mpsc, Notify};

use chatrelay_core::error::{RelayError, Result};
use chatrelay_core::protocol::CloseReason;

use crate::realtime::Session;

pub struct WsSession {
    id: String,
    tx: mpsc::Sender<String>,
    close_reason: OnceLock<CloseReason>,
    close_signal: Notify,
    finished: AtomicBool,
}

impl WsSession {
    pub fn new(id: String, tx: mpsc::Sender<String>) -> Self {
        Self {
            id,
            tx,
            close_reason: OnceLock::new(),
            close_signal: Notify::new(),
            finished: AtomicBool::new(false),
        }
    }

    /// Resolves once `close` has been called. The permit is stored, so a close
    /// requested before the loop starts waiting is not lost.
    pub async fn close_requested(&self) -> CloseReason {
        self.close_signal.notified().await;
        self.close_reason.get().copied().unwrap_or_default()
    }

    /// Called by the session loop once the socket is gone.
    pub fn mark_finished(&self) {
        self.finished.store(true, Ordering::Release);
    }
}

impl Session for WsSession {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_open(&self) -> bool {
        !self.finished.load(Ordering::Acquire)
            && self.close_reason.get().is_none()
            && !self.tx.is_closed()
    }

    fn send(&self, text: &str) -> Result<()> {
        if !self.is_open() {
            return Err(RelayError::SessionClosed);
        }
        self.tx.try_send(text.to_owned()).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => RelayError::QueueFull,
            mpsc::error::TrySendError::Closed(_) => RelayError::SessionClosed,
        })
    }

    fn close(&self, reason: CloseReason) {
        if self.close_reason.set(reason).is_ok() {
            self.close_signal.notify_one();
        }
    }
}
