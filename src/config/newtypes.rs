//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated API public key.
///
/// This newtype ensures the public key is non-empty and provides type safety
/// to prevent accidental misuse of raw strings.
///
/// # Example
///
/// ```rust
/// use roadsafety_api::PublicKey;
///
/// let key = PublicKey::new("my-public-key").unwrap();
/// assert_eq!(key.as_ref(), "my-public-key");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(String);

impl PublicKey {
    /// Creates a new validated public key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPublicKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyPublicKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for PublicKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Self::new(key).map_err(de::Error::custom)
    }
}

/// A validated API private key.
///
/// This newtype ensures the private key is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `PrivateKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use roadsafety_api::PrivateKey;
///
/// let key = PrivateKey::new("my-private-key").unwrap();
/// assert_eq!(format!("{:?}", key), "PrivateKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(String);

impl PrivateKey {
    /// Creates a new validated private key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPrivateKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyPrivateKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for PrivateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(*****)")
    }
}

impl Serialize for PrivateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PrivateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Self::new(key).map_err(de::Error::custom)
    }
}

/// A validated API base URL.
///
/// Accepts `http://` or `https://` URLs. A trailing slash is stripped so
/// path assembly can always join segments with a single `/`.
///
/// # Example
///
/// ```rust
/// use roadsafety_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.example.org/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.example.org");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL does not start
    /// with an http(s) scheme or has no host part.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"));
        match rest {
            Some(host) if !host.is_empty() => Ok(Self(url)),
            _ => Err(ConfigError::InvalidBaseUrl { url }),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The API version path segment used in every request URL.
///
/// Request URLs have the shape `{base}/{version}/{resource}`, so a version
/// must be a non-empty segment without `/` or whitespace.
///
/// # Example
///
/// ```rust
/// use roadsafety_api::ApiVersion;
///
/// let version = ApiVersion::new("v1").unwrap();
/// assert_eq!(version.as_ref(), "v1");
/// assert_eq!(ApiVersion::default().as_ref(), "v1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// Creates a new validated API version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the version is empty
    /// or contains `/` or whitespace.
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into();
        if version.is_empty() || version.contains('/') || version.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidApiVersion { version });
        }
        Ok(Self(version))
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self("v1".to_string())
    }
}

impl AsRef<str> for ApiVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_key_rejects_empty() {
        assert!(matches!(PublicKey::new(""), Err(ConfigError::EmptyPublicKey)));
    }

    #[test]
    fn test_public_key_round_trips_through_serde() {
        let key = PublicKey::new("abc123").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, r#""abc123""#);

        let back: PublicKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn test_public_key_deserialize_rejects_empty() {
        let result: Result<PublicKey, _> = serde_json::from_str(r#""""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_private_key_rejects_empty() {
        assert!(matches!(
            PrivateKey::new(""),
            Err(ConfigError::EmptyPrivateKey)
        ));
    }

    #[test]
    fn test_private_key_debug_is_masked() {
        let key = PrivateKey::new("super-secret").unwrap();
        let debug = format!("{key:?}");
        assert_eq!(debug, "PrivateKey(*****)");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let url = BaseUrl::new("https://api.example.org/").unwrap();
        assert_eq!(url.as_ref(), "https://api.example.org");
    }

    #[test]
    fn test_base_url_accepts_http_scheme() {
        let url = BaseUrl::new("http://localhost:8080").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:8080");
    }

    #[test]
    fn test_base_url_rejects_missing_scheme() {
        assert!(matches!(
            BaseUrl::new("api.example.org"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_base_url_rejects_scheme_only() {
        assert!(matches!(
            BaseUrl::new("https://"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_api_version_default_is_v1() {
        assert_eq!(ApiVersion::default().as_ref(), "v1");
    }

    #[test]
    fn test_api_version_rejects_empty_and_slashes() {
        assert!(ApiVersion::new("").is_err());
        assert!(ApiVersion::new("v1/extra").is_err());
        assert!(ApiVersion::new("v 1").is_err());
    }

    #[test]
    fn test_api_version_display_matches_segment() {
        let version = ApiVersion::new("v2").unwrap();
        assert_eq!(version.to_string(), "v2");
    }
}
