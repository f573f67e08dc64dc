//! Inbound-idle deadline for a session loop.
//!
//! One pinned `Sleep` lives for the whole session and is pushed forward on
//! every inbound frame. Outbound traffic never touches it, so a busy room
//! cannot keep a silent client alive.

use std::pin::Pin;

use tokio::time::{sleep_until, Duration, Instant, Sleep};

pub struct IdleTimer {
    timeout: Duration,
    deadline: Pin<Box<Sleep>>,
}

impl IdleTimer {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            deadline: Box::pin(sleep_until(Instant::now() + timeout)),
        }
    }

    /// Inbound activity: restart the countdown.
    pub fn touch(&mut self) {
        self.deadline.as_mut().reset(Instant::now() + self.timeout);
    }

    /// Resolves once `timeout` has passed since the last `touch`.
    pub async fn expired(&mut self) {
        self.deadline.as_mut().await
    }
}
