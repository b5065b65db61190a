//! HMAC-SHA256 request signatures.
//!
//! A signature is computed over the canonical JSON form of a
//! [`CanonicalParams`] set, keyed by a credential's private key, and
//! hex-encoded. The server recomputes the same digest from the received
//! values, so the canonical form must match byte-for-byte.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::{CanonicalParams, Credential};

type HmacSha256 = Hmac<Sha256>;

/// Computes the signature for a canonical parameter set.
///
/// Returns a lowercase hex-encoded HMAC-SHA256 digest of the set's
/// canonical JSON, keyed by the credential's private key.
///
/// # Note
///
/// This function uses `expect()` internally but this will never panic
/// because HMAC-SHA256 accepts keys of any length.
///
/// # Example
///
/// ```rust
/// use roadsafety_api::auth::{sign, CanonicalParams};
/// use roadsafety_api::{Credential, PublicKey, PrivateKey};
///
/// let credential = Credential::new(
///     1,
///     PublicKey::new("pub").unwrap(),
///     PrivateKey::new("priv").unwrap(),
/// );
/// let mut params = CanonicalParams::new();
/// params.insert("auth_nonce", 12345);
///
/// let signature = sign(&params, &credential);
/// assert_eq!(signature.len(), 64); // SHA256 produces 32 bytes = 64 hex chars
/// ```
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn sign(params: &CanonicalParams, credential: &Credential) -> String {
    let mut mac = HmacSha256::new_from_slice(credential.private_key().as_ref().as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(params.canonical_json().as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
