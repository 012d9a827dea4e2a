//! Endpoint, header map, and per-send options.
//!
//! # Design
//! Everything here is plain data supplied by the caller; nothing touches
//! the network. `Headers` preserves insertion order on the wire and looks
//! names up case-insensitively while keeping the caller's spelling, which
//! is what a well-behaved HTTP/1.1 sender owes its peer.

use std::fmt;
use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A host/port pair identifying the TCP listener to connect to.
///
/// Immutable once constructed. Ports are meaningful in 1–65535; port 0 is
/// not a connectable target and fails at connect time like any dead port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Ordered HTTP header map.
///
/// Names are matched case-insensitively but stored verbatim as first
/// supplied. Replacing a value keeps the header's position in the
/// serialized block and its original spelling.
#[derive(Debug, Clone, Default)]
pub struct Headers {
    entries: IndexMap<String, String>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace, matching the name case-insensitively.
    pub fn set(&mut self, name: &str, value: &str) {
        match self
            .entries
            .keys()
            .find(|stored| stored.eq_ignore_ascii_case(name))
            .cloned()
        {
            Some(stored) => {
                self.entries.insert(stored, value.to_string());
            }
            None => {
                self.entries.insert(name.to_string(), value.to_string());
            }
        }
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(stored, _)| stored.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-send tuning.
///
/// `linger` is the delay between finishing the write and closing the
/// socket, giving a slow reader time to drain the data before teardown.
/// It is not an acknowledgment; callers needing delivery guarantees must
/// layer a real handshake on top. The optional deadlines bound the
/// connect and write phases, which otherwise block indefinitely on a
/// hung endpoint.
#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    pub linger: Duration,
    pub connect_timeout: Option<Duration>,
    pub write_timeout: Option<Duration>,
}

impl SendOptions {
    /// Options with the given linger and no deadlines.
    pub fn with_linger(linger: Duration) -> Self {
        Self {
            linger,
            ..Self::default()
        }
    }
}
