use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

pub const PK_VAR: &str = "EPIC_PK";
pub const ADDRESS_VAR: &str = "EPIC_ADDRESS";
pub const NETWORK_VAR: &str = "EPIC_NETWORK";
pub const RPC_URL_VAR: &str = "EPIC_RPC_URL";

#[derive(Parser)]
#[command(name = "epic", about = "Epic cli tool", version)]
pub struct Cli {
	/// The name of the network.
	#[arg(short, long, env = NETWORK_VAR, global = true)]
	pub network: Option<String>,

	/// Shorthand for '--network testnet'.
	#[arg(long, global = true)]
	pub testnet: bool,

	/// The network RPC URL.
	#[arg(long, env = RPC_URL_VAR, global = true)]
	pub rpc_url: Option<String>,

	/// Enable verbose logging.
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Output format.
	#[arg(short, long, value_enum, default_value_t, global = true)]
	pub format: OutputFormat,

	#[command(subcommand)]
	pub command: Command,
}

/// `--private-key`, shared by every command that signs.
#[derive(Args, Clone, Default)]
pub struct KeyArgs {
	/// The private key.
	#[arg(long = "private-key", visible_alias = "pk", env = PK_VAR, hide_env_values = true)]
	pub private_key: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
	/// Transaction details for a tx ID.
	#[command(visible_alias = "tx")]
	Transaction {
		/// Transaction ID.
		tx_id: Option<String>,

		/// How to render the transaction input data.
		#[arg(long = "input", value_enum, default_value_t)]
		input: InputFormat,
	},

	/// Account details for an address, or the one matching the private key.
	#[command(visible_alias = "addr")]
	Address {
		/// Account address.
		address: Option<String>,

		#[command(flatten)]
		key: KeyArgs,
	},

	/// Account operations.
	#[command(visible_alias = "a")]
	Account {
		#[command(subcommand)]
		command: AccountCommand,
	},

	/// Transfer tokens to an account (epic send X to ADDRESS).
	#[command(visible_alias = "transfer")]
	Send {
		/// Amount to transfer, as a decimal.
		amount: Option<String>,

		/// Recipient, optionally preceded by the word "to".
		recipient: Vec<String>,

		/// The recipient address.
		#[arg(long, env = ADDRESS_VAR)]
		to: Option<String>,

		#[command(flatten)]
		key: KeyArgs,
	},

	/// Deploy code/contract, eg: epic deploy treeder/example@sha256:123
	Deploy {
		/// Code reference to deploy.
		code_ref: Option<String>,

		#[command(flatten)]
		key: KeyArgs,
	},

	/// Run a smart contract, eg: epic run --pk KEY CONTRACT_ADDRESS [ARGS...]
	///
	/// Options must come before CONTRACT_ADDRESS; every later word is a contract argument.
	Run {
		/// Contract address.
		contract: Option<String>,

		/// Arguments passed to the contract.
		#[arg(trailing_var_arg = true, allow_hyphen_values = true)]
		args: Vec<String>,

		#[command(flatten)]
		key: KeyArgs,
	},

	/// Get smart contract state data, eg: epic cstate CONTRACT_ADDRESS /
	Cstate {
		/// Contract address.
		address: Option<String>,

		/// State path, must start with '/'.
		path: Option<String>,

		/// Indent the JSON output.
		#[arg(long)]
		pretty: bool,
	},

	/// Get object by hash.
	#[command(visible_alias = "state")]
	Object {
		/// Object hash.
		hash: Option<String>,
	},

	/// List environment variables.
	Env,

	/// Show or edit the config file.
	Config {
		#[command(subcommand)]
		command: ConfigCommand,
	},
}

// -- Account subcommands --

#[derive(Subcommand)]
pub enum AccountCommand {
	/// Create a new account.
	Create,
}

// -- Config subcommands --

#[derive(Subcommand)]
pub enum ConfigCommand {
	/// Print the current configuration.
	Show,

	/// Set the RPC URL used for a network.
	SetRpc {
		/// Network name.
		network: String,

		/// RPC base URL (http:// or https://).
		url: String,
	},

	/// Set the default network.
	Use {
		/// Network name.
		network: String,
	},
}

/// Rendering of the hex-encoded `input` field of a transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
	/// Byte length only.
	#[default]
	Len,
	/// Raw hex, unchanged.
	Hex,
	/// Decoded as UTF-8.
	Utf8,
}
