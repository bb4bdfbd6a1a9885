use anyhow::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::crypto::{self, KeyPair};

/// Everything the CLI needs from a network node.  Commands only talk to
/// this trait, so they can be exercised without a live endpoint.
#[async_trait::async_trait]
pub trait ChainClient: Send + Sync {
	/// Fetch a transaction and its status by ID.
	async fn get_transaction(&self, tx_id: &str) -> Result<Value>;

	/// Fetch balance, nonce and code information for an address.
	async fn get_state(&self, address: &str) -> Result<Value>;

	/// Fetch a contract's stored state under `path` (empty or `/`-prefixed).
	async fn get_code_state(&self, address: &str, path: &str) -> Result<Value>;

	/// Fetch a raw object by content hash.
	async fn get_object(&self, hash: &str) -> Result<Vec<u8>>;

	/// Sign `tx` with `private_key` and submit it, returning the node's view
	/// of the accepted transaction.
	async fn submit_tx(&self, private_key: &str, tx: TxParams) -> Result<Value>;
}

/// Parameters of a single submission.  Transfers, deploys and contract runs
/// are all the same transaction shape with different fields populated.
#[derive(Debug, Clone, PartialEq)]
pub struct TxParams {
	pub amount: Decimal,
	pub to: String,
	pub code: String,
	pub args: Vec<String>,
}

impl TxParams {
	pub fn transfer(amount: Decimal, to: impl Into<String>) -> Self {
		Self {
			amount,
			to: to.into(),
			code: String::new(),
			args: Vec::new(),
		}
	}

	/// Deploy a code reference (e.g. `treeder/example@sha256:123`).
	pub fn deploy(code_ref: impl Into<String>) -> Self {
		Self {
			amount: Decimal::ZERO,
			to: String::new(),
			code: code_ref.into(),
			args: Vec::new(),
		}
	}

	/// Invoke an existing contract with arguments.
	pub fn invoke(contract: impl Into<String>, args: Vec<String>) -> Self {
		Self {
			amount: Decimal::ZERO,
			to: contract.into(),
			code: String::new(),
			args,
		}
	}

	/// Build the signed wire payload.  `hash` covers the canonical JSON of
	/// every other field; `signature` is over the raw digest bytes.
	pub fn sign(&self, key: &KeyPair, timestamp: i64) -> Result<SignedTx> {
		let unsigned = UnsignedTx {
			from: key.address(),
			to: self.to.clone(),
			amount: self.amount.normalize().to_string(),
			code: self.code.clone(),
			args: self.args.clone(),
			timestamp,
		};
		let body = serde_json::to_vec(&unsigned)?;
		let hash = crypto::sha256_hex(&body);
		let signature = key.sign(&hex::decode(&hash)?);

		Ok(SignedTx {
			from: unsigned.from,
			to: unsigned.to,
			amount: unsigned.amount,
			code: unsigned.code,
			args: unsigned.args,
			timestamp,
			hash,
			signature,
		})
	}
}

#[derive(Serialize)]
struct UnsignedTx {
	from: String,
	to: String,
	amount: String,
	code: String,
	args: Vec<String>,
	timestamp: i64,
}

/// Transaction body as posted to the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedTx {
	pub from: String,
	pub to: String,
	/// Decimal string; never a float.
	pub amount: String,
	pub code: String,
	pub args: Vec<String>,
	pub timestamp: i64,
	pub hash: String,
	pub signature: String,
}

impl SignedTx {
	/// Recompute the digest and check the signature against `from`.
	pub fn verify(&self) -> bool {
		let unsigned = UnsignedTx {
			from: self.from.clone(),
			to: self.to.clone(),
			amount: self.amount.clone(),
			code: self.code.clone(),
			args: self.args.clone(),
			timestamp: self.timestamp,
		};
		let Ok(body) = serde_json::to_vec(&unsigned) else {
			return false;
		};
		let hash = crypto::sha256_hex(&body);
		if hash != self.hash {
			return false;
		}
		match hex::decode(&hash) {
			Ok(digest) => crypto::verify(&self.from, &digest, &self.signature),
			Err(_) => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use std::str::FromStr;

	use super::*;

	#[test]
	fn transfer_payload_is_signed_by_sender() {
		let kp = KeyPair::generate();
		let tx = TxParams::transfer(Decimal::from_str("10.50").unwrap(), "bob")
			.sign(&kp, 1_700_000_000)
			.unwrap();

		assert_eq!(tx.from, kp.address());
		assert_eq!(tx.to, "bob");
		assert_eq!(tx.amount, "10.5");
		assert_eq!(tx.hash.len(), 64);
		assert!(tx.verify());
	}

	#[test]
	fn tampering_breaks_verification() {
		let kp = KeyPair::generate();
		let mut tx = TxParams::transfer(Decimal::ONE, "bob")
			.sign(&kp, 1_700_000_000)
			.unwrap();
		tx.amount = "1000".into();
		assert!(!tx.verify());
	}

	#[test]
	fn amount_keeps_full_precision() {
		let kp = KeyPair::generate();
		let amount = Decimal::from_str("0.000000000000000001").unwrap();
		let tx = TxParams::transfer(amount, "bob").sign(&kp, 0).unwrap();
		assert_eq!(tx.amount, "0.000000000000000001");
	}

	#[test]
	fn deploy_and_invoke_shapes() {
		let deploy = TxParams::deploy("treeder/example@sha256:123");
		assert_eq!(deploy.amount, Decimal::ZERO);
		assert!(deploy.to.is_empty());
		assert_eq!(deploy.code, "treeder/example@sha256:123");

		let run = TxParams::invoke("contract", vec!["a".into(), "b".into()]);
		assert_eq!(run.to, "contract");
		assert!(run.code.is_empty());
		assert_eq!(run.args, ["a", "b"]);
	}
}
