use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

use crate::error::CliError;

// -- Key pairs --

/// An ed25519 signing key together with its derived public address.
pub struct KeyPair {
	signing: SigningKey,
}

impl KeyPair {
	/// Generate a fresh key pair from the operating system RNG.
	pub fn generate() -> Self {
		Self {
			signing: SigningKey::generate(&mut OsRng),
		}
	}

	/// Parse a hex-encoded 32-byte private key (an optional `0x` prefix is allowed).
	pub fn from_private_hex(private_key: &str) -> Result<Self, CliError> {
		let bytes = decode_fixed::<32>(private_key)
			.ok_or_else(|| CliError::InvalidPrivateKey("expected 32 bytes of hex".into()))?;
		Ok(Self {
			signing: SigningKey::from_bytes(&bytes),
		})
	}

	/// Hex encoding of the private key seed.
	pub fn private_key_hex(&self) -> String {
		hex::encode(self.signing.to_bytes())
	}

	/// Public address: hex encoding of the verifying key.
	pub fn address(&self) -> String {
		hex::encode(self.signing.verifying_key().to_bytes())
	}

	/// Sign `message` and return the 64-byte signature as hex.
	pub fn sign(&self, message: &[u8]) -> String {
		hex::encode(self.signing.sign(message).to_bytes())
	}
}

/// Derive the public address that belongs to a private key.
pub fn address_from_private(private_key: &str) -> Result<String, CliError> {
	Ok(KeyPair::from_private_hex(private_key)?.address())
}

/// Check a hex signature produced by [`KeyPair::sign`] against an address.
pub fn verify(address: &str, message: &[u8], signature: &str) -> bool {
	let Some(key) = decode_fixed::<32>(address) else {
		return false;
	};
	let Some(sig) = decode_fixed::<64>(signature) else {
		return false;
	};
	let Ok(key) = VerifyingKey::from_bytes(&key) else {
		return false;
	};
	key.verify(message, &Signature::from_bytes(&sig)).is_ok()
}

// -- Utility --

pub fn sha256_hex(data: &[u8]) -> String {
	hex::encode(Sha256::digest(data))
}

fn decode_fixed<const N: usize>(hex_str: &str) -> Option<[u8; N]> {
	let clean = hex_str.strip_prefix("0x").unwrap_or(hex_str);
	hex::decode(clean).ok()?.try_into().ok()
}
