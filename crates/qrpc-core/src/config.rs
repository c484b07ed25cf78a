//! Client configuration and the defaulted request identity.
//!
//! [`RpcConfig`] is the plain-value surface a config loader (CLI flags, a
//! file, environment) fills in. Empty `version`/`id` fields are resolved to
//! their defaults once, on the first call, and kept in an
//! [`EnvelopeIdentity`] for the lifetime of the client.

use std::time::Duration;

use serde::Deserialize;

/// Protocol version sent in `jsonrpc` when the config leaves it empty.
pub const DEFAULT_VERSION: &str = "1.0";

/// Request id sent in `id` when the config leaves it empty.
pub const DEFAULT_ID: &str = "jsonrpc";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RpcConfig {
    /// Node endpoint, e.g. `http://127.0.0.1:3889`.
    pub url: String,
    pub version: String,
    pub id: String,
    pub user: String,
    pub pass: String,
    /// Echo raw request and response bodies at `info` level.
    pub debug: bool,
    /// Whole-request timeout applied by the HTTP client.
    pub timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
}

impl RpcConfig {
    pub fn new(url: impl Into<String>, user: impl Into<String>, pass: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            user: user.into(),
            pass: pass.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }
}

/// The `jsonrpc` and `id` values stamped on every request of a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeIdentity {
    pub version: String,
    pub id: String,
}

impl EnvelopeIdentity {
    pub(crate) fn resolve(config: &RpcConfig) -> Self {
        Self {
            version: non_empty_or(&config.version, DEFAULT_VERSION),
            id: non_empty_or(&config.id, DEFAULT_ID),
        }
    }
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_owned()
    } else {
        value.to_owned()
    }
}
