use std::collections::BTreeMap;
use std::io::Write;

use anyhow::Result;

use crate::cli::{ADDRESS_VAR, NETWORK_VAR, PK_VAR, RPC_URL_VAR};
use crate::output::{self, OutputFormat};

/// Print the recognized environment variables, sorted by name.
/// `lookup` is normally `std::env::var`.
pub fn run(format: OutputFormat, lookup: impl Fn(&str) -> Option<String>, out: &mut dyn Write) -> Result<()> {
	let vars: BTreeMap<&str, String> = [ADDRESS_VAR, PK_VAR, NETWORK_VAR, RPC_URL_VAR]
		.into_iter()
		.map(|name| (name, lookup(name).unwrap_or_default()))
		.collect();

	match format {
		OutputFormat::Human => {
			for (name, value) in &vars {
				writeln!(out, "{name}={value}")?;
			}
			Ok(())
		}
		OutputFormat::Json => output::write_indented(out, &vars),
	}
}
