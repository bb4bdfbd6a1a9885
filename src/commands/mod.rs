pub mod account;
pub mod address;
pub mod config;
pub mod contract;
pub mod env;
pub mod object;
pub mod send;
pub mod tx;

use std::io::Write;

use anyhow::Result;

use crate::chain::ChainClient;
use crate::cli::{Cli, Command, KeyArgs};
use crate::config::Config;
use crate::error::CliError;
use crate::rpc::RpcClient;

/// Run the parsed command, writing its result to `out`.
pub async fn dispatch(cli: &Cli, out: &mut dyn Write) -> Result<()> {
	match &cli.command {
		Command::Account { command } => account::run(command, cli.format, out),
		Command::Env => env::run(cli.format, |name| std::env::var(name).ok(), out),
		Command::Config { command } => config::run(command, &Config::path()?, out),
		command => {
			let rpc_url = resolve_rpc(cli, Config::load)?;
			tracing::debug!(%rpc_url, "using endpoint");
			let client = RpcClient::new(&rpc_url);
			run_remote(&client, command, out).await
		}
	}
}

/// Commands that need a chain client.
pub async fn run_remote(client: &dyn ChainClient, command: &Command, out: &mut dyn Write) -> Result<()> {
	match command {
		Command::Transaction { tx_id, input } => {
			tx::run(client, tx_id.as_deref().unwrap_or_default(), *input, out).await
		}
		Command::Address { address, key } => {
			address::run(client, address.as_deref().unwrap_or_default(), key, out).await
		}
		Command::Send {
			amount,
			recipient,
			to,
			key,
		} => {
			send::run(
				client,
				amount.as_deref().unwrap_or_default(),
				recipient,
				to.as_deref(),
				key,
				out,
			)
			.await
		}
		Command::Deploy { code_ref, key } => {
			contract::deploy(client, code_ref.as_deref().unwrap_or_default(), key).await
		}
		Command::Run {
			contract,
			args,
			key,
		} => contract::run(client, contract.as_deref().unwrap_or_default(), args, key).await,
		Command::Cstate {
			address,
			path,
			pretty,
		} => {
			contract::code_state(
				client,
				address.as_deref().unwrap_or_default(),
				path.as_deref().unwrap_or_default(),
				*pretty,
				out,
			)
			.await
		}
		Command::Object { hash } => {
			object::run(client, hash.as_deref().unwrap_or_default(), out).await
		}
		Command::Account { .. } | Command::Env | Command::Config { .. } => {
			anyhow::bail!("this command does not talk to a node")
		}
	}
}

/// Network name from `--testnet`, `--network`/`EPIC_NETWORK`, or config.
pub fn resolve_network(cli: &Cli, config: &Config) -> String {
	if cli.testnet {
		return "testnet".into();
	}
	cli.network
		.clone()
		.filter(|n| !n.is_empty())
		.unwrap_or_else(|| config.network.default.clone())
}

/// Resolve the RPC URL from CLI flag/env or the config entry for the network.
/// The config is only loaded when no explicit URL was given.
pub fn resolve_rpc(cli: &Cli, load_config: impl FnOnce() -> Result<Config>) -> Result<String> {
	if let Some(url) = cli.rpc_url.as_deref().filter(|u| !u.is_empty()) {
		return Ok(url.to_owned());
	}
	let config = load_config()?;
	let network = resolve_network(cli, &config);
	tracing::debug!(%network, "endpoint from config");
	config
		.rpc_url(&network)
		.map(str::to_owned)
		.ok_or_else(|| CliError::UnknownNetwork(network).into())
}

/// The private key from `--private-key`/`EPIC_PK`, failing if neither is set.
pub fn require_private_key(key: &KeyArgs) -> Result<&str, CliError> {
	key.private_key
		.as_deref()
		.filter(|pk| !pk.is_empty())
		.ok_or(CliError::MissingPrivateKey)
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	fn parse(args: &[&str]) -> Cli {
		let mut argv = vec!["epic"];
		argv.extend_from_slice(args);
		Cli::try_parse_from(argv).unwrap()
	}

	fn defaults() -> Result<Config> {
		Ok(Config::default())
	}

	#[test]
	fn explicit_url_skips_config_load() {
		let cli = parse(&["--rpc-url", "http://node:9000", "tx", "abc"]);
		let url = resolve_rpc(&cli, || anyhow::bail!("invalid config")).unwrap();
		assert_eq!(url, "http://node:9000");
	}

	#[test]
	fn config_error_surfaces_without_explicit_url() {
		let cli = parse(&["--rpc-url", "", "tx", "abc"]);
		let err = resolve_rpc(&cli, || anyhow::bail!("invalid config")).unwrap_err();
		assert_eq!(err.to_string(), "invalid config");
	}

	#[test]
	fn rpc_flag_wins_over_config() {
		let cli = parse(&["--rpc-url", "http://node:9000", "--testnet", "object", "h"]);
		assert_eq!(resolve_rpc(&cli, defaults).unwrap(), "http://node:9000");
	}

	#[test]
	fn testnet_shorthand_wins_over_network() {
		let mut config = Config::default();
		config
			.network
			.endpoints
			.insert("testnet".into(), "https://testnet.example".into());
		let cli = parse(&["--network", "local", "--testnet", "--rpc-url", "", "object", "h"]);
		assert_eq!(resolve_network(&cli, &config), "testnet");
		assert_eq!(resolve_rpc(&cli, || Ok(config.clone())).unwrap(), "https://testnet.example");
	}

	#[test]
	fn unknown_network_without_url_fails() {
		let cli = parse(&["--network", "nowhere", "--rpc-url", "", "object", "h"]);
		let err = resolve_rpc(&cli, defaults).unwrap_err();
		assert!(matches!(
			err.downcast_ref::<CliError>(),
			Some(CliError::UnknownNetwork(n)) if n == "nowhere"
		));
	}

	#[test]
	fn config_default_network_is_used() {
		let cli = parse(&["--network", "", "--rpc-url", "", "object", "h"]);
		assert_eq!(resolve_rpc(&cli, defaults).unwrap(), "http://localhost:8080");
	}

	#[test]
	fn empty_private_key_is_missing() {
		let key = KeyArgs {
			private_key: Some(String::new()),
		};
		assert!(matches!(require_private_key(&key), Err(CliError::MissingPrivateKey)));
		assert!(matches!(
			require_private_key(&KeyArgs::default()),
			Err(CliError::MissingPrivateKey)
		));
	}
}
