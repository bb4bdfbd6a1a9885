use std::io::Write;

use anyhow::Result;

use crate::chain::ChainClient;
use crate::cli::KeyArgs;
use crate::crypto;
use crate::error::CliError;
use crate::output;

/// Show account state for `address`, or for the key's own address when
/// no address is given.
pub async fn run(client: &dyn ChainClient, address: &str, key: &KeyArgs, out: &mut dyn Write) -> Result<()> {
	let address = resolve_address(address, key)?;
	let state = client.get_state(&address).await?;
	output::write_indented(out, &state)
}

fn resolve_address(address: &str, key: &KeyArgs) -> Result<String, CliError> {
	if !address.is_empty() {
		return Ok(address.to_owned());
	}
	match key.private_key.as_deref() {
		Some(pk) if !pk.is_empty() => crypto::address_from_private(pk),
		_ => Err(CliError::MissingAddress),
	}
}
