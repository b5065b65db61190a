//! HTTP transport for executing built requests.
//!
//! This module provides the [`Transport`] type that turns a
//! [`RequestSpec`] + [`AuthContext`] pair into a wire request. The full
//! header set is composed at send-time: static headers, the auth identity
//! headers, a fresh nonce and timestamp, and one signature per credential.
//! Regenerating nonce and timestamp on every send (including re-sends of
//! the same logical request) is what gives the scheme its replay
//! protection.

use crate::auth::{AuthContext, CanonicalParams, HEADER_NONCE, HEADER_TIMESTAMP};
use crate::clients::errors::ApiError;
use crate::clients::request::{Method, RequestSpec};
use crate::clients::response::RawResponse;
use crate::config::ApiConfig;

/// Request header carrying the raw JSON of the active filter.
///
/// Mirrors the `?filter=` query parameter; the header form is what
/// participates in signing.
pub const FILTER_HEADER: &str = "filter";

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Executes built requests against the configured endpoint.
///
/// One `Transport` wraps one connection pool and can be shared (or cheaply
/// cloned) across tasks. Each call is independent: no state carries over
/// between requests, and no retry is attempted; failures surface as-is.
///
/// # Thread Safety
///
/// `Transport` is `Send + Sync + Clone`, making it safe to share across
/// async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use roadsafety_api::{ApiConfig, AuthContext, Method, RequestSpec, Transport};
///
/// let transport = Transport::new(ApiConfig::default());
/// let spec = RequestSpec::builder(Method::Get, "datasets").build()?;
/// let raw = transport.execute(&spec, &auth).await?;
/// ```
#[derive(Clone, Debug)]
pub struct Transport {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Endpoint, version, timeout, and diagnostics settings.
    config: ApiConfig,
}

// Verify Transport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Transport>();
};

impl Transport {
    /// Creates a new transport for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Returns the configuration this transport was created with.
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Executes one request and decomposes the wire response.
    ///
    /// Blocks (asynchronously) until the response is fully received. The
    /// returned [`RawResponse`] always carries a status code here; the
    /// no-status-line case only arises when the transport itself fails,
    /// which this method reports as an error instead.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] on connection-level failure. No
    /// automatic retry is attempted.
    pub async fn execute(
        &self,
        spec: &RequestSpec,
        auth: &AuthContext,
    ) -> Result<RawResponse, ApiError> {
        let version = self.config.api_version().as_ref();
        let signing_url = spec.signing_url(self.config.base_url(), version);
        let url = spec.request_url(self.config.base_url(), version);

        // Fresh per send; never reused across sends of the same spec.
        let nonce: u64 = rand::random();
        let timestamp = chrono::Utc::now().timestamp();

        let params = Self::canonical_params(spec, auth, &signing_url, nonce, timestamp);
        let signatures = auth.signature_headers(&params);

        let mut request = match spec.method() {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Patch => self.client.patch(&url),
            Method::Delete => self.client.delete(&url),
        };

        request = request.header("Accept", "application/json");
        for (name, value) in auth.identity_fields() {
            request = request.header(name, value);
        }
        request = request
            .header(HEADER_NONCE, nonce.to_string())
            .header(HEADER_TIMESTAMP, timestamp.to_string());
        for (name, value) in signatures {
            request = request.header(name, value);
        }
        if let Some(filter) = spec.filter() {
            request = request.header(FILTER_HEADER, filter.to_header_json());
        }
        if let Some(body) = spec.body() {
            request = request
                .header("Content-Type", "application/json")
                .body(body.wire_value().to_string());
        }

        if self.config.diagnostics() {
            tracing::debug!(target_url = %url, method = %spec.method(), "dispatching request");
        }

        let response = request.send().await?;

        let code = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response.text().await.unwrap_or_default();

        if self.config.diagnostics() {
            tracing::debug!(code, raw_response = %body, "received response");
        }

        Ok(RawResponse::new(Some(code), headers, body))
    }

    /// Composes the canonical parameter set a send's signatures cover.
    ///
    /// Body fields are inserted first so the protocol fields (identity,
    /// nonce, timestamp, url) always win a key collision.
    fn canonical_params(
        spec: &RequestSpec,
        auth: &AuthContext,
        signing_url: &str,
        nonce: u64,
        timestamp: i64,
    ) -> CanonicalParams {
        let mut params = CanonicalParams::new();

        if let Some(body) = spec.body() {
            for (name, value) in body.signable_fields() {
                params.insert(name, value);
            }
        }
        if let Some(filter) = spec.filter() {
            params.insert(FILTER_HEADER, filter.to_header_json());
        }
        for (name, value) in auth.identity_fields() {
            params.insert(name, value);
        }
        params.insert(HEADER_NONCE, nonce);
        params.insert(HEADER_TIMESTAMP, timestamp);
        params.insert_url(signing_url);

        params
    }
}
