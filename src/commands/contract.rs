use std::io::Write;

use anyhow::Result;

use crate::chain::{ChainClient, TxParams};
use crate::cli::KeyArgs;
use crate::commands::require_private_key;
use crate::error::CliError;
use crate::output;

/// Submit a code reference.  Prints nothing on success.
pub async fn deploy(client: &dyn ChainClient, code_ref: &str, key: &KeyArgs) -> Result<()> {
	let private_key = require_private_key(key)?;
	if code_ref.is_empty() {
		return Err(CliError::MissingCodeRef.into());
	}

	let tx = client.submit_tx(private_key, TxParams::deploy(code_ref)).await?;
	tracing::info!(%code_ref, id = %tx_id(&tx), "deploy submitted");
	Ok(())
}

/// Invoke a contract with extra arguments.  Prints nothing on success.
pub async fn run(client: &dyn ChainClient, contract: &str, args: &[String], key: &KeyArgs) -> Result<()> {
	let private_key = require_private_key(key)?;
	if contract.is_empty() {
		return Err(CliError::MissingAddress.into());
	}
	reject_key_flags(args)?;

	let tx = client
		.submit_tx(private_key, TxParams::invoke(contract, args.to_vec()))
		.await?;
	tracing::info!(%contract, id = %tx_id(&tx), "contract run submitted");
	Ok(())
}

/// Print a contract's stored state under `path`.
pub async fn code_state(
	client: &dyn ChainClient,
	address: &str,
	path: &str,
	pretty: bool,
	out: &mut dyn Write,
) -> Result<()> {
	if address.is_empty() {
		return Err(CliError::MissingAddress.into());
	}
	validate_state_path(path)?;

	let state = client.get_code_state(address, path).await?;
	output::write_json(out, &state, pretty)
}

pub fn validate_state_path(path: &str) -> Result<(), CliError> {
	if path.is_empty() || path.starts_with('/') {
		Ok(())
	} else {
		Err(CliError::InvalidStatePath(path.to_owned()))
	}
}

/// Everything after CONTRACT is published, so a key flag there is a mistake.
fn reject_key_flags(args: &[String]) -> Result<(), CliError> {
	let is_key_flag = |arg: &str| {
		["--pk", "--private-key"]
			.iter()
			.any(|flag| arg == *flag || arg.strip_prefix(flag).is_some_and(|rest| rest.starts_with('=')))
	};
	match args.iter().find(|arg| is_key_flag(arg)) {
		Some(arg) => Err(CliError::KeyFlagInArgs(arg.clone())),
		None => Ok(()),
	}
}

fn tx_id(tx: &serde_json::Value) -> &str {
	tx.pointer("/tx/id")
		.or_else(|| tx.get("id"))
		.and_then(|v| v.as_str())
		.unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn state_paths() {
		assert!(validate_state_path("").is_ok());
		assert!(validate_state_path("/").is_ok());
		assert!(validate_state_path("/a/b").is_ok());
		assert!(matches!(
			validate_state_path("a/b"),
			Err(CliError::InvalidStatePath(p)) if p == "a/b"
		));
	}

	#[test]
	fn key_flags_in_contract_args() {
		let args = |ws: &[&str]| ws.iter().map(|w| w.to_string()).collect::<Vec<_>>();

		assert!(reject_key_flags(&args(&["inc", "2", "--pretty"])).is_ok());
		assert!(reject_key_flags(&args(&["--pkg", "x"])).is_ok());
		for bad in [&["a", "--pk", "k"][..], &["--private-key", "k"][..], &["--pk=k"][..], &["--private-key=k"][..]] {
			assert!(
				matches!(reject_key_flags(&args(bad)), Err(CliError::KeyFlagInArgs(_))),
				"{bad:?}"
			);
		}
	}

	#[test]
	fn tx_id_lookup() {
		assert_eq!(tx_id(&json!({"tx": {"id": "nested"}})), "nested");
		assert_eq!(tx_id(&json!({"id": "flat"})), "flat");
		assert_eq!(tx_id(&json!(null)), "unknown");
	}
}
