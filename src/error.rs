//! Error types for SDK configuration.
//!
//! This module contains error types used for configuration and credential
//! validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use roadsafety_api::{PublicKey, ConfigError};
//!
//! let result = PublicKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyPublicKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Public key cannot be empty.
    #[error("Public key cannot be empty. Please provide a valid API public key.")]
    EmptyPublicKey,

    /// Private key cannot be empty.
    #[error("Private key cannot be empty. Please provide a valid API private key.")]
    EmptyPrivateKey,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an http(s) URL without a trailing slash.")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected a non-empty path segment (e.g., 'v1').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_public_key_error_message() {
        let error = ConfigError::EmptyPublicKey;
        let message = error.to_string();
        assert!(message.contains("Public key cannot be empty"));
        assert!(message.contains("valid API public key"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("http(s)"));
    }

    #[test]
    fn test_invalid_api_version_error_message() {
        let error = ConfigError::InvalidApiVersion {
            version: "v 1".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("v 1"));
        assert!(message.contains("path segment"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyPublicKey;
        // Verify it implements std::error::Error by using it as a dyn Error
        let _: &dyn std::error::Error = &error;
    }
}
