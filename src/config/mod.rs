//! Configuration types for the SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for communication with the road-safety data API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ApiConfig`]: The main configuration struct holding all SDK settings
//! - [`ApiConfigBuilder`]: A builder for constructing [`ApiConfig`] instances
//! - [`Environment`]: Selects the live or development API endpoint
//! - [`PublicKey`] / [`PrivateKey`]: Validated credential key newtypes
//! - [`BaseUrl`]: A validated custom endpoint URL
//! - [`ApiVersion`]: The API version path segment
//!
//! # Example
//!
//! ```rust
//! use roadsafety_api::{ApiConfig, Environment};
//!
//! let config = ApiConfig::builder()
//!     .environment(Environment::Development)
//!     .diagnostics(true)
//!     .build();
//!
//! assert!(config.base_url().contains("dev"));
//! ```

mod newtypes;

pub use newtypes::{ApiVersion, BaseUrl, PrivateKey, PublicKey};

use std::time::Duration;

/// Base URL of the live API endpoint.
const LIVE_BASE_URL: &str = "https://api.roadsafetydata.org";

/// Base URL of the development API endpoint.
const DEV_BASE_URL: &str = "https://api.dev.roadsafetydata.org";

/// Selects which API endpoint requests are sent to.
///
/// The live and development endpoints are fixed, well-known URLs. Use
/// [`Environment::Custom`] to target a local mock server or proxy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    /// The production endpoint.
    #[default]
    Live,
    /// The development/staging endpoint.
    Development,
    /// An explicit endpoint, e.g. a local test server.
    Custom(BaseUrl),
}

impl Environment {
    /// Returns the base URL this environment resolves to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        match self {
            Self::Live => LIVE_BASE_URL,
            Self::Development => DEV_BASE_URL,
            Self::Custom(url) => url.as_ref(),
        }
    }
}

/// Configuration for the SDK.
///
/// This struct holds all configuration needed for request construction and
/// transport: the target endpoint, API version, an optional per-request
/// timeout, and a diagnostics flag.
///
/// # Thread Safety
///
/// `ApiConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Diagnostics
///
/// When `diagnostics` is set, the transport echoes the target URL and the
/// raw response body through `tracing::debug!`. The flag is purely
/// observational and never changes request behavior.
///
/// # Example
///
/// ```rust
/// use roadsafety_api::{ApiConfig, Environment};
/// use std::time::Duration;
///
/// let config = ApiConfig::builder()
///     .environment(Environment::Live)
///     .timeout(Duration::from_secs(30))
///     .build();
///
/// assert_eq!(config.base_url(), "https://api.roadsafetydata.org");
/// ```
#[derive(Clone, Debug)]
pub struct ApiConfig {
    environment: Environment,
    api_version: ApiVersion,
    timeout: Option<Duration>,
    diagnostics: bool,
}

impl ApiConfig {
    /// Creates a new builder for constructing an `ApiConfig`.
    #[must_use]
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::new()
    }

    /// Returns the environment requests are sent to.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.environment.base_url()
    }

    /// Returns the API version path segment.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the per-request timeout, if configured.
    ///
    /// The remote API enforces no timeout of its own; without this setting
    /// a hung endpoint blocks the caller (and a whole batch) indefinitely.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns whether diagnostics logging is enabled.
    #[must_use]
    pub const fn diagnostics(&self) -> bool {
        self.diagnostics
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

// Verify ApiConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiConfig>();
};

/// Builder for constructing [`ApiConfig`] instances.
///
/// All fields have sensible defaults, so `ApiConfig::builder().build()` is
/// always valid.
///
/// # Defaults
///
/// - `environment`: [`Environment::Live`]
/// - `api_version`: `v1`
/// - `timeout`: `None` (wait indefinitely, matching the remote API's own behavior)
/// - `diagnostics`: `false`
///
/// # Example
///
/// ```rust
/// use roadsafety_api::{ApiConfig, ApiVersion, BaseUrl, Environment};
///
/// let config = ApiConfig::builder()
///     .environment(Environment::Custom(
///         BaseUrl::new("http://localhost:9100").unwrap(),
///     ))
///     .api_version(ApiVersion::new("v2").unwrap())
///     .build();
///
/// assert_eq!(config.base_url(), "http://localhost:9100");
/// ```
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    environment: Option<Environment>,
    api_version: Option<ApiVersion>,
    timeout: Option<Duration>,
    diagnostics: Option<bool>,
}

impl ApiConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target environment.
    #[must_use]
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Sets the API version path segment.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the per-request timeout.
    ///
    /// Also bounds each request of a batch, so a single hung endpoint
    /// cannot stall the whole batch.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enables or disables diagnostics logging.
    #[must_use]
    pub const fn diagnostics(mut self, diagnostics: bool) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    /// Builds the [`ApiConfig`].
    #[must_use]
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            environment: self.environment.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            timeout: self.timeout,
            diagnostics: self.diagnostics.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = ApiConfig::builder().build();

        assert_eq!(config.environment(), &Environment::Live);
        assert_eq!(config.base_url(), "https://api.roadsafetydata.org");
        assert_eq!(config.api_version().as_ref(), "v1");
        assert!(config.timeout().is_none());
        assert!(!config.diagnostics());
    }

    #[test]
    fn test_development_environment_resolves_dev_url() {
        let config = ApiConfig::builder()
            .environment(Environment::Development)
            .build();

        assert_eq!(config.base_url(), "https://api.dev.roadsafetydata.org");
    }

    #[test]
    fn test_custom_environment_resolves_custom_url() {
        let config = ApiConfig::builder()
            .environment(Environment::Custom(
                BaseUrl::new("http://localhost:9100").unwrap(),
            ))
            .build();

        assert_eq!(config.base_url(), "http://localhost:9100");
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = ApiConfig::builder()
            .environment(Environment::Development)
            .api_version(ApiVersion::new("v3").unwrap())
            .timeout(Duration::from_secs(10))
            .diagnostics(true)
            .build();

        assert_eq!(config.api_version().as_ref(), "v3");
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
        assert!(config.diagnostics());
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiConfig>();
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = ApiConfig::builder().build();
        let cloned = config.clone();
        assert_eq!(cloned.base_url(), config.base_url());

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("ApiConfig"));
    }

    #[test]
    fn test_default_matches_builder_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.environment(), &Environment::Live);
        assert!(!config.diagnostics());
    }
}
