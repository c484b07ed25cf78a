//! JSON-RPC client core for Bitcoin/Qtum-compatible wallet nodes.
//!
//! ```no_run
//! use qrpc_core::rpc::{HttpRpcClient, WalletRpc};
//! use qrpc_core::RpcConfig;
//!
//! # async fn run() -> Result<(), qrpc_core::CoreError> {
//! let rpc = HttpRpcClient::new(RpcConfig::new("http://127.0.0.1:3889", "test", "test1234"))?;
//! let address = rpc.get_new_address().await?;
//! # let _ = address;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod rpc;

pub use config::{EnvelopeIdentity, RpcConfig};
pub use error::{CoreError, RpcError};
