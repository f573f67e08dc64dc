//! Handshake attributes captured before the WebSocket upgrade.
//!
//! The upgrade request's query string is copied into a read-only map and
//! handed to the session handler on establish. Nothing in the chat flow
//! depends on it; a client still announces its name in-band.

use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandshakeAttributes {
    attrs: BTreeMap<String, String>,
}

impl HandshakeAttributes {
    pub fn from_query(params: HashMap<String, String>) -> Self {
        Self {
            attrs: params.into_iter().collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
