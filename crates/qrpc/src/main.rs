mod cli;

use bitcoin::Amount;
use clap::Parser;
use eyre::{eyre, WrapErr};
use serde_json::Value;

use qrpc_core::rpc::{HttpRpcClient, WalletRpc};
use qrpc_core::RpcConfig;

use cli::Command;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let config = RpcConfig {
        url: args.rpc_url.clone(),
        version: args.rpc_version,
        id: args.rpc_id,
        user: args.rpc_user,
        pass: args.rpc_pass,
        debug: args.debug,
        timeout_secs: Some(args.timeout_secs),
        connect_timeout_secs: Some(args.timeout_secs.min(10)),
    };
    let rpc = HttpRpcClient::new(config).context("configure RPC client")?;
    tracing::debug!(rpc_url = %args.rpc_url, timeout_secs = args.timeout_secs, "rpc client ready");

    let output = run(&rpc, args.command)
        .await
        .wrap_err_with(|| format!("while calling RPC endpoint `{}`", args.rpc_url))?;
    tracing::debug!(rpc_url = %args.rpc_url, "rpc call succeeded");
    println!("{output}");

    Ok(())
}

async fn run(rpc: &HttpRpcClient, command: Command) -> eyre::Result<String> {
    let output = match command {
        Command::Call { method, params } => {
            let params = params.iter().map(String::as_str).map(parse_param).collect();
            pretty(&rpc.call(&method, params).await?)?
        }
        Command::GetNewAddress => rpc.get_new_address().await?,
        Command::GetAddressesByAccount { account } => {
            rpc.get_addresses_by_account(&account).await?.join("\n")
        }
        Command::GetAccountAddress { account } => rpc.get_account_address(&account).await?,
        Command::GetReceivedByAddress { address } => {
            format_btc(rpc.get_received_by_address(&address).await?)
        }
        Command::GetReceivedByAccount { account } => {
            format_btc(rpc.get_received_by_account(&account).await?)
        }
        Command::SendToAddress { address, amount } => {
            let amount = Amount::from_btc(amount)
                .map_err(|e| eyre!("invalid amount `{amount}`: {e}"))?;
            rpc.send_to_address(&address, amount).await?
        }
        Command::GetBlockCount => rpc.get_block_count().await?.to_string(),
        Command::GetInfo => pretty(&rpc.get_info().await?)?,
    };
    Ok(output)
}

/// Interpret a command-line param as JSON (`1`, `true`, `"x"`, `[..]`),
/// falling back to a bare string so addresses need no quoting.
fn parse_param(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

fn pretty(value: &Value) -> eyre::Result<String> {
    serde_json::to_string_pretty(value).context("format RPC result")
}

fn format_btc(amount: Amount) -> String {
    amount.to_string_in(bitcoin::Denomination::Bitcoin)
}
