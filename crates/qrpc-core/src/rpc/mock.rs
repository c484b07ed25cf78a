use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{CoreError, RpcError};

use super::WalletRpc;

/// Bitcoin Core's code for an unknown method.
const RPC_METHOD_NOT_FOUND: i64 = -32601;

/// A mock node for testing. Returns canned results or errors per method,
/// populated via the builder pattern, and records every call it receives.
pub struct MockRpc {
    responses: HashMap<String, Result<Value, RpcError>>,
    calls: Mutex<Vec<(String, Vec<Value>)>>,
}

impl MockRpc {
    pub fn builder() -> MockRpcBuilder {
        MockRpcBuilder {
            responses: HashMap::new(),
        }
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }
}

pub struct MockRpcBuilder {
    responses: HashMap<String, Result<Value, RpcError>>,
}

impl MockRpcBuilder {
    pub fn with_result(mut self, method: &str, result: Value) -> Self {
        self.responses.insert(method.to_owned(), Ok(result));
        self
    }

    pub fn with_error(mut self, method: &str, error: RpcError) -> Self {
        self.responses.insert(method.to_owned(), Err(error));
        self
    }

    pub fn build(self) -> MockRpc {
        MockRpc {
            responses: self.responses,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl WalletRpc for MockRpc {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, CoreError> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push((method.to_owned(), params));

        match self.responses.get(method) {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(err)) => Err(CoreError::Rpc(err.clone())),
            None => Err(CoreError::Rpc(RpcError {
                code: RPC_METHOD_NOT_FOUND,
                message: "Method not found".to_owned(),
            })),
        }
    }
}
