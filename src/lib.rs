//! # Road-Safety Data API Rust SDK
//!
//! A Rust SDK for the road-safety assessment data API, providing signed
//! request construction, typed resource access, and concurrent batch
//! execution.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ApiConfig`] and [`ApiConfigBuilder`]
//! - Validated newtypes for credentials and endpoint values
//! - HMAC-SHA256 request signing over canonical parameter sets via [`auth`]
//! - Single and dual (app + user) credential contexts via [`AuthContext`]
//! - Canonical URL and request construction via [`RequestSpec`]
//! - Async HTTP transport with per-send nonce/timestamp via [`Transport`]
//! - Structured response parsing via [`ApiResponse`]
//! - Concurrent multi-request execution via [`BatchExecutor`]
//! - Generic resource CRUD access via [`resources::ResourceClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use roadsafety_api::{
//!     ApiConfig, AuthContext, Credential, Environment, PrivateKey, PublicKey,
//! };
//!
//! // Configure the SDK and the application credential
//! let config = ApiConfig::builder()
//!     .environment(Environment::Development)
//!     .build();
//!
//! let auth = AuthContext::app_only(Credential::new(
//!     42,
//!     PublicKey::new("your-public-key").unwrap(),
//!     PrivateKey::new("your-private-key").unwrap(),
//! ));
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use roadsafety_api::resources::{paths, ResourceClient};
//! use roadsafety_api::PathSegments;
//!
//! let client = ResourceClient::new(config, auth);
//!
//! // GET {base}/v1/datasets/5
//! let response = client
//!     .get(paths::DATASETS, Some(5_u64.into()), PathSegments::None, None)
//!     .await?;
//!
//! if response.is_success() {
//!     println!("dataset: {:?}", response.body);
//! }
//! ```
//!
//! ## Calling On Behalf Of A User
//!
//! Most operations require both an application credential and a user
//! credential. Both sign the same canonical content, producing two
//! signature headers:
//!
//! ```rust
//! use roadsafety_api::{AuthContext, Credential, PublicKey, PrivateKey};
//!
//! let app = Credential::new(
//!     1,
//!     PublicKey::new("app-pub").unwrap(),
//!     PrivateKey::new("app-priv").unwrap(),
//! );
//! let user = Credential::new(
//!     9,
//!     PublicKey::new("user-pub").unwrap(),
//!     PrivateKey::new("user-priv").unwrap(),
//! );
//!
//! let auth = AuthContext::app_and_user(app, user);
//! assert!(auth.user().is_some());
//! ```
//!
//! ## Filtering
//!
//! ```rust
//! use roadsafety_api::{Filter, FilterOperator};
//!
//! let filter = Filter::all(vec![
//!     Filter::new("country", FilterOperator::Eq, "NZ"),
//!     Filter::new("star_rating", FilterOperator::Le, 2),
//! ]);
//!
//! // Carried twice: URL-encoded in `?filter=`, raw JSON in the `filter`
//! // header. Only the header form participates in signing.
//! assert!(filter.to_query_string().starts_with("%7B"));
//! ```
//!
//! ## Batch Execution
//!
//! ```rust,ignore
//! use roadsafety_api::{BatchExecutor, Method, RequestSpec, Transport};
//!
//! let executor = BatchExecutor::new(Transport::new(config));
//! let results = executor
//!     .execute_all(vec![(users_spec, auth.clone()), (regions_spec, auth)])
//!     .await?;
//!
//! // One result per spec, in input order; a failed transfer becomes an
//! // Error result at its index instead of aborting the batch.
//! assert_eq!(results.len(), 2);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration, credentials, and caches are
//!   instance-based and passed explicitly
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: all shared types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **Immutable requests**: a built [`RequestSpec`] never changes;
//!   per-send material (nonce, timestamp, signatures) is generated fresh
//!   at dispatch time

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod filter;
pub mod resources;

// Re-export public types at crate root for convenience
pub use auth::{AuthContext, CanonicalParams, Credential};
pub use config::{ApiConfig, ApiConfigBuilder, ApiVersion, BaseUrl, Environment, PrivateKey, PublicKey};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    ApiError, ApiResponse, BatchExecutor, InvalidRequestError, Method, PathSegments, RawResponse,
    RequestBody, RequestSpec, RequestSpecBuilder, ResourceId, ResponseStatus, Transport,
};

// Re-export filter types for convenience
pub use filter::{Filter, FilterOperator, GroupOperator};
