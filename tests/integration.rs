//! Integration tests that hit a running Epic node.
//!
//! These are marked `#[ignore]` by default because they require a node on
//! `EPIC_RPC_URL` (or http://localhost:8080). Run them explicitly with:
//!
//!   cargo test --test integration -- --ignored
//!
//! The transfer test also needs a funded key in `EPIC_PK`.

use epic_cli::chain::{ChainClient, TxParams};
use epic_cli::config::LOCAL_RPC;
use epic_cli::crypto::KeyPair;
use epic_cli::rpc::RpcClient;
use rust_decimal::Decimal;

fn rpc() -> RpcClient {
	let url = std::env::var("EPIC_RPC_URL").unwrap_or_else(|_| LOCAL_RPC.to_owned());
	RpcClient::new(&url)
}

#[tokio::test]
#[ignore]
async fn fresh_address_state_is_json() {
	let addr = KeyPair::generate().address();
	let state = rpc().get_state(&addr).await.expect("get_state failed");
	assert!(state.is_object(), "expected a JSON object, got {state}");
}

#[tokio::test]
#[ignore]
async fn unknown_transaction_is_an_error() {
	let result = rpc().get_transaction(&"0".repeat(64)).await;
	assert!(result.is_err(), "expected an error for an unknown tx id");
}

#[tokio::test]
#[ignore]
async fn transfer_roundtrip() {
	let pk = std::env::var("EPIC_PK").expect("EPIC_PK must hold a funded key");
	let client = rpc();
	let to = KeyPair::generate().address();

	let submitted = client
		.submit_tx(&pk, TxParams::transfer(Decimal::ONE, to.as_str()))
		.await
		.expect("submit failed");
	println!("submitted: {submitted}");

	let state = client.get_state(&to).await.expect("get_state failed");
	println!("recipient state: {state}");
}
