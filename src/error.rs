use rust_decimal::Decimal;
use thiserror::Error;

/// Argument problems caught before any call reaches the network.
#[derive(Debug, Error)]
pub enum CliError {
	#[error("must provide tx ID")]
	MissingTxId,

	#[error("must provide address")]
	MissingAddress,

	#[error("private key required")]
	MissingPrivateKey,

	#[error("must provide recipient address (epic send AMOUNT to ADDRESS)")]
	MissingRecipient,

	#[error("must provide code reference")]
	MissingCodeRef,

	#[error("invalid amount {input:?}: {source}")]
	InvalidAmount {
		input: String,
		#[source]
		source: rust_decimal::Error,
	},

	#[error("amount must not be negative, got {0}")]
	NegativeAmount(Decimal),

	#[error("path must start with /, got {0:?}")]
	InvalidStatePath(String),

	#[error("{0:?} after the contract address would be sent as a contract argument; put --private-key before CONTRACT")]
	KeyFlagInArgs(String),

	#[error("invalid private key: {0}")]
	InvalidPrivateKey(String),

	#[error("invalid {what}: {url:?} must start with http:// or https://")]
	InvalidUrl { what: &'static str, url: String },

	#[error("no RPC endpoint for network {0:?}. Pass --rpc-url or run: epic config set-rpc {0} <url>")]
	UnknownNetwork(String),
}
