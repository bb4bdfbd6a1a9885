use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::cli::ConfigCommand;
use crate::config::Config;
use crate::error::CliError;

pub fn run(cmd: &ConfigCommand, path: &Path, out: &mut dyn Write) -> Result<()> {
	match cmd {
		ConfigCommand::Show => show(path, out),
		ConfigCommand::SetRpc { network, url } => set_rpc(path, network, url, out),
		ConfigCommand::Use { network } => use_network(path, network, out),
	}
}

fn show(path: &Path, out: &mut dyn Write) -> Result<()> {
	let config = Config::load_from(path)?;
	writeln!(out, "# {}", path.display())?;
	write!(out, "{}", toml::to_string_pretty(&config)?)?;
	Ok(())
}

fn set_rpc(path: &Path, network: &str, url: &str, out: &mut dyn Write) -> Result<()> {
	if network.is_empty() {
		anyhow::bail!("network name must not be empty");
	}
	validate_http_url(url, "RPC URL")?;

	let mut config = Config::load_from(path)?;
	config
		.network
		.endpoints
		.insert(network.to_owned(), url.trim_end_matches('/').to_owned());
	config.save_to(path)?;
	writeln!(out, "RPC URL for {network} set to: {url}")?;
	Ok(())
}

fn use_network(path: &Path, network: &str, out: &mut dyn Write) -> Result<()> {
	if network.is_empty() {
		anyhow::bail!("network name must not be empty");
	}

	let mut config = Config::load_from(path)?;
	config.network.default = network.to_owned();
	config.save_to(path)?;
	writeln!(out, "Default network set to: {network}")?;
	if config.rpc_url(network).is_none() {
		tracing::warn!("no RPC URL configured for {network}; run: epic config set-rpc {network} <url>");
	}
	Ok(())
}

fn validate_http_url(url: &str, what: &'static str) -> Result<(), CliError> {
	if url.starts_with("http://") || url.starts_with("https://") {
		Ok(())
	} else {
		Err(CliError::InvalidUrl {
			what,
			url: url.to_owned(),
		})
	}
}
