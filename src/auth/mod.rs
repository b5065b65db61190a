//! Credentials, canonical parameter sets, and request signing.
//!
//! This module implements the authentication side of the wire protocol:
//!
//! - [`Credential`]: an identity + public/private key pair
//! - [`CanonicalParams`]: the normalized, key-sorted value set a signature covers
//! - [`sign`]: HMAC-SHA256 over the canonical JSON, hex-encoded
//! - [`AuthContext`]: one or two credentials composed into the full header set
//!
//! The nonce and timestamp headers are generated fresh on every send by
//! the transport layer, never stored here.

mod context;
mod credential;
mod params;
mod signer;

pub use context::{
    AuthContext, HEADER_NONCE, HEADER_SYSTEM_AUTH_ID, HEADER_SYSTEM_PUBLIC_KEY,
    HEADER_SYSTEM_SIGNATURE, HEADER_TIMESTAMP, HEADER_USER_AUTH_ID, HEADER_USER_PUBLIC_KEY,
    HEADER_USER_SIGNATURE,
};
pub use credential::Credential;
pub use params::{CanonicalParams, URL_KEY};
pub use signer::sign;
