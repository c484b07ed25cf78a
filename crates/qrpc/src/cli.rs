use clap::{Parser, Subcommand};

/// qrpc — JSON-RPC client for Bitcoin/Qtum-compatible wallet nodes.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Node RPC URL.
    #[arg(long, default_value = "http://127.0.0.1:3889", env = "QRPC_RPC_URL")]
    pub rpc_url: String,

    /// RPC username.
    #[arg(long, default_value = "", env = "QRPC_RPC_USER")]
    pub rpc_user: String,

    /// RPC password.
    #[arg(long, default_value = "", env = "QRPC_RPC_PASS", hide_env_values = true)]
    pub rpc_pass: String,

    /// Value of the `jsonrpc` envelope field (empty means "1.0").
    #[arg(long, default_value = "", env = "QRPC_RPC_VERSION")]
    pub rpc_version: String,

    /// Value of the `id` envelope field (empty means "jsonrpc").
    #[arg(long, default_value = "", env = "QRPC_RPC_ID")]
    pub rpc_id: String,

    /// Log raw request and response bodies.
    #[arg(long, env = "QRPC_DEBUG")]
    pub debug: bool,

    /// Give up on a call after this many seconds.
    #[arg(
        long,
        default_value = "30",
        env = "QRPC_TIMEOUT_SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Call any method. Each param is parsed as JSON, or sent as a string
    /// when it is not valid JSON.
    Call {
        method: String,
        params: Vec<String>,
    },
    GetNewAddress,
    GetAddressesByAccount {
        account: String,
    },
    GetAccountAddress {
        account: String,
    },
    GetReceivedByAddress {
        address: String,
    },
    GetReceivedByAccount {
        account: String,
    },
    /// Send an amount (in BTC units) and print the txid.
    SendToAddress {
        address: String,
        amount: f64,
    },
    GetBlockCount,
    GetInfo,
}
