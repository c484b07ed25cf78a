use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("rpc call timed out after {0:?}")]
    Timeout(Duration),

    #[error("encode JSON-RPC request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid JSON-RPC response: {0}")]
    Decode(String),

    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error("unexpected result for `{method}`: expected {expected}, got {found}")]
    TypeMismatch {
        method: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("invalid rpc configuration: {0}")]
    Config(String),
}

/// Structured error returned by the node in the `error` member of a response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Deserialize)]
#[error("[code: {code}] {message}")]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}
