//! API credentials.
//!
//! A [`Credential`] is the identity + key pair issued for either an
//! application or an individual user. Credentials are immutable once
//! constructed and are consumed by the signing layer.

use serde::{Deserialize, Serialize};

use crate::config::{PrivateKey, PublicKey};

/// An API credential: a numeric identity and its public/private key pair.
///
/// The same type represents both application and user credentials; which
/// role a credential plays is determined by its position in an
/// [`AuthContext`](crate::auth::AuthContext).
///
/// # Security
///
/// The private key is wrapped in [`PrivateKey`], whose `Debug`
/// implementation masks the value, so a `Credential` can be logged without
/// leaking its secret.
///
/// # Example
///
/// ```rust
/// use roadsafety_api::{Credential, PublicKey, PrivateKey};
///
/// let credential = Credential::new(
///     42,
///     PublicKey::new("public").unwrap(),
///     PrivateKey::new("private").unwrap(),
/// );
///
/// assert_eq!(credential.identity(), 42);
/// assert!(!format!("{credential:?}").contains("private"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    identity: u64,
    public_key: PublicKey,
    private_key: PrivateKey,
}

impl Credential {
    /// Creates a new credential.
    #[must_use]
    pub const fn new(identity: u64, public_key: PublicKey, private_key: PrivateKey) -> Self {
        Self {
            identity,
            public_key,
            private_key,
        }
    }

    /// Returns the numeric identity this credential was issued for.
    #[must_use]
    pub const fn identity(&self) -> u64 {
        self.identity
    }

    /// Returns the public key.
    #[must_use]
    pub const fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Returns the private key used as the HMAC signing key.
    #[must_use]
    pub const fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }
}
