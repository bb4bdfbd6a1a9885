use std::io::Write;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::chain::{ChainClient, TxParams};
use crate::cli::KeyArgs;
use crate::commands::require_private_key;
use crate::error::CliError;
use crate::output;

/// `epic send AMOUNT [to] ADDRESS`: sign and submit a transfer.
pub async fn run(
	client: &dyn ChainClient,
	amount: &str,
	recipient: &[String],
	to_flag: Option<&str>,
	key: &KeyArgs,
	out: &mut dyn Write,
) -> Result<()> {
	let private_key = require_private_key(key)?;
	let amount = parse_amount(amount)?;
	let to = resolve_recipient(recipient, to_flag)?;

	let tx = client
		.submit_tx(private_key, TxParams::transfer(amount, to))
		.await?;
	tracing::info!(%amount, %to, "transfer submitted");
	output::write_indented(out, &tx)
}

/// Parse an exact decimal amount.  Input that cannot be held without
/// rounding is refused, as are negative values.
pub fn parse_amount(input: &str) -> Result<Decimal, CliError> {
	let amount = Decimal::from_str_exact(input.trim()).map_err(|source| CliError::InvalidAmount {
		input: input.to_owned(),
		source,
	})?;
	if amount.is_sign_negative() && !amount.is_zero() {
		return Err(CliError::NegativeAmount(amount));
	}
	Ok(amount)
}

/// Accepts `to ADDR`, a bare `ADDR`, or falls back to `--to`/`EPIC_ADDRESS`.
fn resolve_recipient<'a>(words: &'a [String], to_flag: Option<&'a str>) -> Result<&'a str, CliError> {
	let positional = match words {
		[kw, addr] if kw.eq_ignore_ascii_case("to") => Some(addr.as_str()),
		[addr] if !addr.eq_ignore_ascii_case("to") => Some(addr.as_str()),
		_ => None,
	};
	positional
		.or(to_flag)
		.filter(|addr| !addr.is_empty())
		.ok_or(CliError::MissingRecipient)
}
