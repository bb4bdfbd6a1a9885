use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// How commands with a human-readable form render their result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	#[default]
	Human,
	Json,
}

/// Serialize with a four-space indent, the layout used for query results.
pub fn to_indented_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
	let mut buf = Vec::new();
	let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
	value.serialize(&mut ser).context("cannot marshal json")?;
	String::from_utf8(buf).context("cannot marshal json")
}

pub fn write_indented<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
	writeln!(out, "{}", to_indented_json(value)?)?;
	Ok(())
}

/// Compact single-line JSON, or two-space pretty JSON when `pretty` is set.
pub fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T, pretty: bool) -> Result<()> {
	let rendered = if pretty {
		serde_json::to_string_pretty(value)
	} else {
		serde_json::to_string(value)
	}
	.context("cannot marshal json")?;
	writeln!(out, "{rendered}")?;
	Ok(())
}
