use std::io::Write;

use anyhow::Result;
use serde_json::Value;

use crate::chain::ChainClient;
use crate::cli::InputFormat;
use crate::error::CliError;
use crate::output;

pub async fn run(
	client: &dyn ChainClient,
	tx_id: &str,
	input: InputFormat,
	out: &mut dyn Write,
) -> Result<()> {
	if tx_id.is_empty() {
		return Err(CliError::MissingTxId.into());
	}

	let mut resp = client.get_transaction(tx_id).await?;
	render_input(&mut resp, input);
	output::write_indented(out, &resp)
}

/// Rewrite the hex `tx.input` field in place according to `format`.
/// Anything that is not a hex string is left alone.
pub fn render_input(resp: &mut Value, format: InputFormat) {
	let Some(field) = resp.pointer_mut("/tx/input") else {
		return;
	};
	let Some(raw) = field.as_str() else {
		return;
	};
	let Ok(bytes) = hex::decode(raw.strip_prefix("0x").unwrap_or(raw)) else {
		return;
	};

	match format {
		InputFormat::Hex => {}
		InputFormat::Len => *field = Value::String(format!("<{} bytes>", bytes.len())),
		InputFormat::Utf8 => *field = Value::String(String::from_utf8_lossy(&bytes).into_owned()),
	}
}
