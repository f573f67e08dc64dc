use std::net::SocketAddr;

use serde::Deserialize;
use chatrelay_core::error::{RelayError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub chat: ChatSection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(RelayError::UnsupportedVersion);
        }

        self.gateway.validate()?;
        self.chat.validate()?;

        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            chat: ChatSection::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_ping_interval_ms")]
    pub ping_interval_ms: u64,

    #[serde(default = "default_idle_timeout_ms")]
    pub idle_timeout_ms: u64,

    /// Per-connection outbound queue depth. A full queue drops the message
    /// for that recipient only.
    #[serde(default = "default_outbound_queue")]
    pub outbound_queue: usize,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            ping_interval_ms: default_ping_interval_ms(),
            idle_timeout_ms: default_idle_timeout_ms(),
            outbound_queue: default_outbound_queue(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !(5000..=120000).contains(&self.ping_interval_ms) {
            return Err(RelayError::Config(
                "gateway.ping_interval_ms must be between 5000 and 120000".into(),
            ));
        }
        if !(10000..=600000).contains(&self.idle_timeout_ms) {
            return Err(RelayError::Config(
                "gateway.idle_timeout_ms must be between 10000 and 600000".into(),
            ));
        }
        if self.idle_timeout_ms <= self.ping_interval_ms {
            return Err(RelayError::Config(
                "gateway.idle_timeout_ms must be greater than ping_interval_ms".into(),
            ));
        }
        if !(1..=65536).contains(&self.outbound_queue) {
            return Err(RelayError::Config(
                "gateway.outbound_queue must be between 1 and 65536".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen
            .parse()
            .map_err(|e| RelayError::Config(format!("gateway.listen must be a valid SocketAddr: {e}")))
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_ping_interval_ms() -> u64 {
    20000
}
fn default_idle_timeout_ms() -> u64 {
    60000
}
fn default_outbound_queue() -> usize {
    256
}

/// Chat rules. Defaults: names up to 10 chars, messages up to 200 chars, one
/// accepted message per 2 seconds per connection.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChatSection {
    #[serde(default = "default_max_name_chars")]
    pub max_name_chars: usize,

    #[serde(default = "default_max_message_chars")]
    pub max_message_chars: usize,

    #[serde(default = "default_min_interval_ms")]
    pub min_interval_ms: u64,
}

impl Default for ChatSection {
    fn default() -> Self {
        Self {
            max_name_chars: default_max_name_chars(),
            max_message_chars: default_max_message_chars(),
            min_interval_ms: default_min_interval_ms(),
        }
    }
}

impl ChatSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=64).contains(&self.max_name_chars) {
            return Err(RelayError::Config(
                "chat.max_name_chars must be between 1 and 64".into(),
            ));
        }
        if !(1..=10000).contains(&self.max_message_chars) {
            return Err(RelayError::Config(
                "chat.max_message_chars must be between 1 and 10000".into(),
            ));
        }
        if self.min_interval_ms > 60000 {
            return Err(RelayError::Config(
                "chat.min_interval_ms must be at most 60000".into(),
            ));
        }
        Ok(())
    }
}

fn default_max_name_chars() -> usize {
    10
}
fn default_max_message_chars() -> usize {
    200
}
fn default_min_interval_ms() -> u64 {
    2000
}
