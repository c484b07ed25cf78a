use reqwest::Url;

use crate::config::RpcConfig;
use crate::error::CoreError;

pub(super) fn parse_connection(connection: &str) -> Result<String, CoreError> {
    let parsed = Url::parse(connection).map_err(|e| {
        CoreError::Config(format!(
            "invalid connection `{connection}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(connection.to_owned()),
        other => Err(CoreError::Config(format!(
            "unsupported connection scheme `{other}`; expected http or https"
        ))),
    }
}

/// Build the HTTP client shared by every call of one [`HttpRpcClient`].
///
/// Timeouts are only set when configured; without them a call waits until
/// the node answers or the caller drops the future.
///
/// [`HttpRpcClient`]: super::HttpRpcClient
pub(super) fn build_http_client(config: &RpcConfig) -> Result<reqwest::Client, CoreError> {
    let mut builder = reqwest::Client::builder().tcp_nodelay(true);
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    if let Some(connect_timeout) = config.connect_timeout() {
        builder = builder.connect_timeout(connect_timeout);
    }
    builder
        .build()
        .map_err(|e| CoreError::Config(format!("build HTTP client: {e}")))
}
