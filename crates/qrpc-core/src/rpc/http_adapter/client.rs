use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use serde_json::Value;
use tracing::{debug, info, trace};

use crate::config::{EnvelopeIdentity, RpcConfig};
use crate::error::CoreError;

use super::super::codec;
use super::super::WalletRpc;
use super::connection::{build_http_client, parse_connection};

/// Content type sent with every request body.
const CONTENT_TYPE: &str = "text/json";

// ==============================================================================
// HttpRpcClient
// ==============================================================================

/// JSON-RPC client over HTTP(S).
///
/// One instance is created per endpoint and shared across calls (it is
/// `Send + Sync`). Each call builds a fresh request envelope; the only state
/// shared between calls is the envelope identity, resolved once on first use.
pub struct HttpRpcClient {
    client: reqwest::Client,
    config: RpcConfig,
    identity: OnceLock<EnvelopeIdentity>,
}

impl HttpRpcClient {
    /// Create a client for `config.url`, which must be an `http://` or
    /// `https://` URL.
    pub fn new(config: RpcConfig) -> Result<Self, CoreError> {
        parse_connection(&config.url)?;
        let client = build_http_client(&config)?;

        Ok(Self {
            client,
            config,
            identity: OnceLock::new(),
        })
    }

    /// The `jsonrpc`/`id` pair in use, or `None` before the first call.
    pub fn envelope_identity(&self) -> Option<&EnvelopeIdentity> {
        self.identity.get()
    }

    /// Resolve defaults exactly once. Concurrent first calls observe the
    /// same value.
    fn ensure_identity(&self) -> &EnvelopeIdentity {
        self.identity.get_or_init(|| EnvelopeIdentity::resolve(&self.config))
    }

    /// Like [`WalletRpc::call`], but gives up with [`CoreError::Timeout`]
    /// once `timeout` elapses. The in-flight request is dropped.
    pub async fn call_with_timeout(
        &self,
        method: &str,
        params: Vec<Value>,
        timeout: Duration,
    ) -> Result<Value, CoreError> {
        tokio::time::timeout(timeout, WalletRpc::call(self, method, params))
            .await
            .map_err(|_| CoreError::Timeout(timeout))?
    }

    fn log_wire(&self, direction: &'static str, method: &str, bytes: &[u8]) {
        let body = String::from_utf8_lossy(bytes);
        if self.config.debug {
            info!(target: "qrpc_core::wire", method, direction, body = %body, "json-rpc debug");
        } else {
            trace!(target: "qrpc_core::wire", method, direction, body = %body, "json-rpc body");
        }
    }
}

#[async_trait]
impl WalletRpc for HttpRpcClient {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, CoreError> {
        let identity = self.ensure_identity();
        debug!(
            rpc.id = %identity.id,
            rpc.method = method,
            rpc.params = params.len(),
            "rpc call"
        );

        let payload = codec::encode(&identity.version, &identity.id, method, &params)?;
        self.log_wire("request", method, &payload);

        let response = self
            .client
            .post(&self.config.url)
            .header(header::CONTENT_TYPE, CONTENT_TYPE)
            .basic_auth(&self.config.user, Some(&self.config.pass))
            .body(payload)
            .send()
            .await
            .map_err(CoreError::Transport)?;
        // bitcoind answers RPC errors with HTTP 500 and a JSON body, so the
        // status is logged but never interpreted.
        let status = response.status();

        let body = response.bytes().await.map_err(CoreError::Transport)?;
        debug!(
            rpc.id = %identity.id,
            rpc.method = method,
            %status,
            body_len = body.len(),
            "rpc response"
        );
        self.log_wire("response", method, &body);

        codec::decode(&body)?.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_non_http_url() {
        let err = HttpRpcClient::new(RpcConfig::new("ftp://127.0.0.1", "u", "p"))
            .err()
            .expect("ftp must be rejected");
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn identity_is_unset_until_first_use() {
        let client = HttpRpcClient::new(RpcConfig::new("http://127.0.0.1:13889", "u", "p"))
            .expect("client must construct");
        assert!(client.envelope_identity().is_none());

        let first = client.ensure_identity().clone();
        assert_eq!(first.version, "1.0");
        assert_eq!(first.id, "jsonrpc");
        assert_eq!(client.envelope_identity(), Some(&first));
    }
}
