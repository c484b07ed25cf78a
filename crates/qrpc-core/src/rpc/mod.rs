//! Node RPC abstraction layer.
//!
//! Defines the [`WalletRpc`] trait: one required generic [`WalletRpc::call`]
//! plus typed wallet wrappers built on top of it. [`HttpRpcClient`] provides
//! the JSON-RPC over HTTP implementation and `mock::MockRpc` a canned one
//! for tests.

pub mod codec;
mod coerce;
mod http_adapter;
#[cfg(test)]
pub mod mock;

pub use http_adapter::HttpRpcClient;

use async_trait::async_trait;
use bitcoin::Amount;
use serde_json::Value;

use crate::error::CoreError;

/// RPC surface of a Bitcoin/Qtum-compatible wallet node.
///
/// Wrappers map a literal method name and positional parameters onto
/// [`call`](WalletRpc::call) and coerce the result with a checked
/// conversion. Errors from `call` are returned unchanged.
#[async_trait]
pub trait WalletRpc: Send + Sync {
    /// Invoke `method` with ordered positional `params` and return the raw
    /// result value.
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, CoreError>;

    /// Return a new address for receiving payments.
    async fn get_new_address(&self) -> Result<String, CoreError> {
        let raw = self.call("getnewaddress", Vec::new()).await?;
        coerce::into_string("getnewaddress", raw)
    }

    /// Return the list of addresses for the given account.
    async fn get_addresses_by_account(&self, account: &str) -> Result<Vec<String>, CoreError> {
        let raw = self
            .call("getaddressesbyaccount", vec![Value::from(account)])
            .await?;
        coerce::into_string_list("getaddressesbyaccount", raw)
    }

    /// Return the current receiving address of `account`, creating the
    /// account if needed. The node rotates the address once it has received
    /// a payment.
    async fn get_account_address(&self, account: &str) -> Result<String, CoreError> {
        let raw = self
            .call("getaccountaddress", vec![Value::from(account)])
            .await?;
        coerce::into_string("getaccountaddress", raw)
    }

    /// Total received by `address` in transactions with at least one
    /// confirmation.
    async fn get_received_by_address(&self, address: &str) -> Result<Amount, CoreError> {
        let raw = self
            .call("getreceivedbyaddress", vec![Value::from(address)])
            .await?;
        coerce::into_btc_amount("getreceivedbyaddress", raw)
    }

    /// Total received by the addresses of `account`.
    async fn get_received_by_account(&self, account: &str) -> Result<Amount, CoreError> {
        let raw = self
            .call("getreceivedbyaccount", vec![Value::from(account)])
            .await?;
        coerce::into_btc_amount("getreceivedbyaccount", raw)
    }

    /// Send `amount` to `address` and return the transaction id.
    async fn send_to_address(&self, address: &str, amount: Amount) -> Result<String, CoreError> {
        let raw = self
            .call(
                "sendtoaddress",
                vec![Value::from(address), Value::from(amount.to_btc())],
            )
            .await?;
        coerce::into_string("sendtoaddress", raw)
    }

    async fn get_block_count(&self) -> Result<u64, CoreError> {
        let raw = self.call("getblockcount", Vec::new()).await?;
        coerce::into_u64("getblockcount", raw)
    }

    /// Node/wallet status object. Its shape varies between node versions and
    /// is returned as-is.
    async fn get_info(&self) -> Result<Value, CoreError> {
        self.call("getinfo", Vec::new()).await
    }
}
