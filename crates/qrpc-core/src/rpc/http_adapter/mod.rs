//! JSON-RPC client for Bitcoin/Qtum-compatible endpoints.
//!
//! Implements [`WalletRpc`](super::WalletRpc) over HTTP(S) using `reqwest`,
//! with basic auth on every request, lazily defaulted envelope identity, and
//! optional per-call deadlines.

mod client;
mod connection;

pub use client::HttpRpcClient;
