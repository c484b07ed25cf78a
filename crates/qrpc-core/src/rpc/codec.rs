//! JSON-RPC request/response envelopes. Pure data transformation, no I/O.

use serde_json::Value;

use crate::error::{CoreError, RpcError};

#[derive(serde::Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'a str,
    id: &'a str,
    method: &'a str,
    params: &'a [Value],
}

#[derive(serde::Deserialize)]
struct RawResponse {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

/// A decoded response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRpcResponse {
    pub id: Value,
    /// `Null` when the node sent no result or an explicit `null`.
    pub result: Value,
    pub error: Option<RpcError>,
}

impl JsonRpcResponse {
    /// Collapse the envelope into the call outcome. A present error always
    /// wins over a result sent alongside it.
    pub fn into_result(self) -> Result<Value, CoreError> {
        match self.error {
            Some(err) => Err(CoreError::Rpc(err)),
            None => Ok(self.result),
        }
    }
}

/// Serialize a request envelope. `params` is always emitted as an array,
/// `[]` when empty.
pub fn encode(
    version: &str,
    id: &str,
    method: &str,
    params: &[Value],
) -> Result<Vec<u8>, CoreError> {
    let req = JsonRpcRequest {
        jsonrpc: version,
        id,
        method,
        params,
    };
    serde_json::to_vec(&req).map_err(CoreError::Encode)
}

/// Parse a response envelope.
///
/// Fails with [`CoreError::Decode`] when the bytes are not JSON, the top
/// level is not an object, or `error` is neither null nor
/// `{"code": <int>, "message": <string>}`.
pub fn decode(bytes: &[u8]) -> Result<JsonRpcResponse, CoreError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| {
        CoreError::Decode(format!(
            "{e}; body={}",
            String::from_utf8_lossy(bytes)
        ))
    })?;
    if !value.is_object() {
        return Err(CoreError::Decode(format!(
            "expected a JSON object envelope, got {}",
            value_kind(&value)
        )));
    }

    let raw: RawResponse = serde_json::from_value(value)
        .map_err(|e| CoreError::Decode(format!("malformed envelope: {e}")))?;
    let error = raw.error.map(parse_jsonrpc_error).transpose()?;

    Ok(JsonRpcResponse {
        id: raw.id,
        result: raw.result.unwrap_or(Value::Null),
        error,
    })
}

fn parse_jsonrpc_error(err: Value) -> Result<RpcError, CoreError> {
    serde_json::from_value::<RpcError>(err.clone())
        .map_err(|_| CoreError::Decode(format!("non-standard JSON-RPC error: {err}")))
}

/// Short name for the JSON shape of `value`, used in error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
