use std::io::Write;

use anyhow::Result;

use crate::cli::AccountCommand;
use crate::crypto::KeyPair;
use crate::output::{self, OutputFormat};

pub fn run(cmd: &AccountCommand, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
	match cmd {
		AccountCommand::Create => create(format, out),
	}
}

fn create(format: OutputFormat, out: &mut dyn Write) -> Result<()> {
	let kp = KeyPair::generate();

	match format {
		OutputFormat::Human => {
			writeln!(out, "Private key: {}", kp.private_key_hex())?;
			writeln!(out, "Public address: {}", kp.address())?;
		}
		OutputFormat::Json => {
			let pair = serde_json::json!({
				"private_key": kp.private_key_hex(),
				"address": kp.address(),
			});
			output::write_indented(out, &pair)?;
		}
	}
	Ok(())
}
