use anyhow::{anyhow, Context, Result};
use serde_json::Value;

use crate::chain::{ChainClient, TxParams};
use crate::crypto::KeyPair;

/// HTTP client for an Epic node.
///
/// Every query is a plain `GET` returning JSON; submissions are signed
/// locally and `POST`ed to `/tx`.
pub struct RpcClient {
	url: String,
	http: reqwest::Client,
}

impl RpcClient {
	pub fn new(url: &str) -> Self {
		Self {
			url: url.trim_end_matches('/').to_owned(),
			http: reqwest::Client::new(),
		}
	}

	pub fn url(&self) -> &str {
		&self.url
	}

	fn endpoint(&self, path: &str) -> String {
		format!("{}{path}", self.url)
	}

	async fn get(&self, path: &str) -> Result<reqwest::Response> {
		let url = self.endpoint(path);
		tracing::debug!(%url, "GET");
		let resp = self
			.http
			.get(&url)
			.send()
			.await
			.with_context(|| format!("request to {url} failed"))?;
		check_status(&url, resp).await
	}

	async fn get_json(&self, path: &str) -> Result<Value> {
		let url = self.endpoint(path);
		self.get(path)
			.await?
			.json()
			.await
			.with_context(|| format!("invalid JSON from {url}"))
	}
}

#[async_trait::async_trait]
impl ChainClient for RpcClient {
	async fn get_transaction(&self, tx_id: &str) -> Result<Value> {
		self.get_json(&format!("/tx/{tx_id}")).await
	}

	async fn get_state(&self, address: &str) -> Result<Value> {
		self.get_json(&format!("/addr/{address}")).await
	}

	async fn get_code_state(&self, address: &str, path: &str) -> Result<Value> {
		let resp = self
			.get_json(&format!("/addr/{address}/state{path}"))
			.await?;
		Ok(code_state_of(resp))
	}

	async fn get_object(&self, hash: &str) -> Result<Vec<u8>> {
		let url = self.endpoint(&format!("/object/{hash}"));
		let bytes = self
			.get(&format!("/object/{hash}"))
			.await?
			.bytes()
			.await
			.with_context(|| format!("failed to read body from {url}"))?;
		Ok(bytes.to_vec())
	}

	async fn submit_tx(&self, private_key: &str, tx: TxParams) -> Result<Value> {
		let key = KeyPair::from_private_hex(private_key)?;
		let signed = tx.sign(&key, chrono::Utc::now().timestamp())?;

		let url = self.endpoint("/tx");
		tracing::debug!(%url, hash = %signed.hash, from = %signed.from, "POST");
		let resp = self
			.http
			.post(&url)
			.json(&signed)
			.send()
			.await
			.with_context(|| format!("request to {url} failed"))?;

		check_status(&url, resp)
			.await?
			.json()
			.await
			.with_context(|| format!("invalid JSON from {url}"))
	}
}

// -- Private helpers --

/// The `state` member of a code-state response, or null when absent.
fn code_state_of(mut resp: Value) -> Value {
	resp.get_mut("state").map(Value::take).unwrap_or(Value::Null)
}

/// Turn a non-2xx response into an error carrying the body text.
async fn check_status(url: &str, resp: reqwest::Response) -> Result<reqwest::Response> {
	let status = resp.status();
	if status.is_success() {
		return Ok(resp);
	}
	let body = resp.text().await.unwrap_or_default();
	Err(status_error(url, status, &body))
}

fn status_error(url: &str, status: reqwest::StatusCode, body: &str) -> anyhow::Error {
	anyhow!("{url} returned {status}: {}", body.trim())
}
