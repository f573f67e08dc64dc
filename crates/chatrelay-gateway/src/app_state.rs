//! Shared application state for the chat relay gateway.
//!
//! Owns the config, the connection registry and the chat handler. The
//! registry is an explicit instance (not a process global), so every
//! `AppState` (and every test) gets its own.

use std::sync::Arc;

use chatrelay_core::clock::{Clock, SystemClock};
use chatrelay_core::error::Result;

use crate::config::GatewayConfig;
use crate::realtime::ConnectionRegistry;
use crate::services::{ChatHandler, ChatLimits};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    registry: Arc<ConnectionRegistry>,
    chat: Arc<ChatHandler>,
}

impl AppState {
    /// Build application state on the wall clock.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        Self::with_clock(cfg, Arc::new(SystemClock))
    }

    /// Build application state with an injected clock.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn with_clock(cfg: GatewayConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        cfg.validate()?;

        let registry = Arc::new(ConnectionRegistry::new());
        let limits = ChatLimits::from(&cfg.chat);
        let chat = Arc::new(ChatHandler::new(Arc::clone(&registry), clock, limits));

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, registry, chat }),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> Arc<ConnectionRegistry> {
        Arc::clone(&self.inner.registry)
    }

    pub fn chat(&self) -> Arc<ChatHandler> {
        Arc::clone(&self.inner.chat)
    }
}
