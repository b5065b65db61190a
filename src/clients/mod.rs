//! Request construction, transport, response parsing, and batch execution.
//!
//! This module is the core of the SDK: it turns a logical API call into a
//! canonical URL and a canonical signable parameter set, executes it over
//! HTTP, and decomposes the wire response into a structured result.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`RequestSpec`]: one logical API call, built once, immutable
//! - [`Transport`]: executes a spec with fresh per-send auth material
//! - [`RawResponse`]: the undecomposed output of one transport call
//! - [`ApiResponse`]: the structured result callers consume
//! - [`BatchExecutor`]: drives N independent requests concurrently
//! - [`ApiError`]: the failures that cannot be represented as a result
//!
//! # Example
//!
//! ```rust,ignore
//! use roadsafety_api::{ApiConfig, ApiResponse, Method, RequestSpec, Transport};
//!
//! let transport = Transport::new(ApiConfig::default());
//! let spec = RequestSpec::builder(Method::Get, "datasets").id(5_u64).build()?;
//!
//! let raw = transport.execute(&spec, &auth).await?;
//! let response = ApiResponse::from_raw(raw)?;
//! if response.is_success() {
//!     println!("dataset: {:?}", response.body);
//! }
//! ```

mod batch;
mod errors;
mod request;
mod response;
mod transport;

pub use batch::BatchExecutor;
pub use errors::{ApiError, InvalidRequestError};
pub use request::{Method, PathSegments, RequestBody, RequestSpec, RequestSpecBuilder, ResourceId};
pub use response::{
    ApiResponse, RawResponse, ResponseStatus, ERROR_HEADER, NO_RESPONSE_ERROR, STATUS_HEADER,
};
pub use transport::{Transport, FILTER_HEADER, SDK_VERSION};
