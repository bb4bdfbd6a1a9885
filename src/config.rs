use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};

pub const LOCAL_NETWORK: &str = "local";
pub const LOCAL_RPC: &str = "http://localhost:8080";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
	#[serde(default)]
	pub network: NetworkConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
	/// Network used when neither `--network` nor `--testnet` is given.
	pub default: String,
	/// RPC base URL per network name.
	pub endpoints: BTreeMap<String, String>,
}

impl Default for NetworkConfig {
	fn default() -> Self {
		Self {
			default: LOCAL_NETWORK.into(),
			endpoints: BTreeMap::from([(LOCAL_NETWORK.into(), LOCAL_RPC.into())]),
		}
	}
}

impl Config {
	/// Directory where CLI state is stored (~/.epic/).
	pub fn dir() -> anyhow::Result<PathBuf> {
		dirs::home_dir()
			.map(|home| home.join(".epic"))
			.ok_or_else(|| anyhow!("could not determine home directory"))
	}

	/// Path to the config file.
	pub fn path() -> anyhow::Result<PathBuf> {
		Ok(Self::dir()?.join("config.toml"))
	}

	/// Load config from the default location.
	pub fn load() -> anyhow::Result<Self> {
		Self::load_from(&Self::path()?)
	}

	/// Load config from `path`, falling back to defaults if no file exists.
	pub fn load_from(path: &Path) -> anyhow::Result<Self> {
		if !path.exists() {
			return Ok(Self::default());
		}
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("failed to read {}", path.display()))?;
		toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
	}

	/// Persist the config to `path`, creating the directory if needed.
	pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(path, toml::to_string_pretty(self)?)?;
		Ok(())
	}

	/// RPC URL configured for a network, if any.
	pub fn rpc_url(&self, network: &str) -> Option<&str> {
		self.network.endpoints.get(network).map(String::as_str)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_point_at_local_node() {
		let c = Config::default();
		assert_eq!(c.network.default, "local");
		assert_eq!(c.rpc_url("local"), Some("http://localhost:8080"));
		assert_eq!(c.rpc_url("testnet"), None);
	}

	#[test]
	fn toml_roundtrip() {
		let mut c = Config::default();
		c.network.default = "testnet".into();
		c.network
			.endpoints
			.insert("testnet".into(), "https://testnet.example/rpc".into());

		let serialized = toml::to_string_pretty(&c).unwrap();
		let parsed: Config = toml::from_str(&serialized).unwrap();

		assert_eq!(parsed, c);
	}

	#[test]
	fn partial_file_keeps_defaults() {
		let parsed: Config = toml::from_str("[network]\ndefault = \"testnet\"\n").unwrap();
		assert_eq!(parsed.network.default, "testnet");
		assert_eq!(parsed.rpc_url("local"), Some("http://localhost:8080"));

		let empty: Config = toml::from_str("").unwrap();
		assert_eq!(empty, Config::default());
	}

	#[test]
	fn missing_file_loads_defaults_and_save_creates_dirs() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("nested").join("config.toml");

		assert_eq!(Config::load_from(&path).unwrap(), Config::default());

		let mut c = Config::default();
		c.network.default = "devnet".into();
		c.save_to(&path).unwrap();
		assert_eq!(Config::load_from(&path).unwrap(), c);
	}

	#[test]
	fn garbage_file_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("config.toml");
		std::fs::write(&path, "network = 5").unwrap();
		assert!(Config::load_from(&path).is_err());
	}
}
