use std::io::Write;

use anyhow::Result;

use crate::chain::ChainClient;

/// Print the raw object bytes as text.
pub async fn run(client: &dyn ChainClient, hash: &str, out: &mut dyn Write) -> Result<()> {
	let bytes = client.get_object(hash).await?;
	writeln!(out, "{}", String::from_utf8_lossy(&bytes))?;
	Ok(())
}
