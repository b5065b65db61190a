//! Generic resource access.
//!
//! The remote API exposes a few dozen resource collections that all
//! follow the same CRUD shape. Rather than one client type per resource,
//! [`ResourceClient`] is a single generic client parameterized by a
//! resource-path value; the well-known paths live in [`paths`] as plain
//! constants.
//!
//! # Example
//!
//! ```rust,ignore
//! use roadsafety_api::resources::{paths, ResourceClient};
//! use roadsafety_api::{ApiConfig, AuthContext, PathSegments};
//!
//! let client = ResourceClient::new(ApiConfig::default(), auth);
//!
//! // GET {base}/v1/datasets/5
//! let dataset = client
//!     .get(paths::DATASETS, Some(5_u64.into()), PathSegments::None, None)
//!     .await?;
//! ```

pub mod permissions;

pub use permissions::PermissionCache;

use serde_json::Value;

use crate::auth::AuthContext;
use crate::clients::{
    ApiError, ApiResponse, BatchExecutor, Method, PathSegments, RequestSpec, ResourceId, Transport,
};
use crate::config::ApiConfig;
use crate::filter::Filter;

/// Well-known resource paths.
pub mod paths {
    /// The users collection.
    pub const USERS: &str = "users";
    /// The datasets collection.
    pub const DATASETS: &str = "datasets";
    /// The programmes collection.
    pub const PROGRAMMES: &str = "programmes";
    /// The regions collection.
    pub const REGIONS: &str = "regions";
    /// The projects collection.
    pub const PROJECTS: &str = "projects";
    /// The variables collection.
    pub const VARIABLES: &str = "variables";
    /// The road attributes collection.
    pub const ROAD_ATTRIBUTES: &str = "road-attributes";
    /// The fatalities collection.
    pub const FATALITIES: &str = "fatalities";
    /// The star ratings collection.
    pub const STAR_RATINGS: &str = "star-ratings";
    /// The permission lookups collection.
    pub const PERMISSIONS: &str = "permissions";
}

/// A generic client over one authentication context.
///
/// Every method maps directly onto the wire protocol's CRUD shape:
/// `get`/`create`/`replace`/`update`/`remove` issue one call each, and
/// [`execute_batch`](Self::execute_batch) dispatches independent specs
/// concurrently.
///
/// # Thread Safety
///
/// `ResourceClient` is `Send + Sync`, making it safe to share across
/// async tasks.
#[derive(Clone, Debug)]
pub struct ResourceClient {
    transport: Transport,
    auth: AuthContext,
}

// Verify ResourceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceClient>();
};

impl ResourceClient {
    /// Creates a new client for the given configuration and credentials.
    #[must_use]
    pub fn new(config: ApiConfig, auth: AuthContext) -> Self {
        Self {
            transport: Transport::new(config),
            auth,
        }
    }

    /// Creates a client over an existing transport.
    ///
    /// Useful for sharing one connection pool between clients that call
    /// with different credentials.
    #[must_use]
    pub const fn with_transport(transport: Transport, auth: AuthContext) -> Self {
        Self { transport, auth }
    }

    /// Returns the authentication context calls are signed with.
    #[must_use]
    pub const fn auth(&self) -> &AuthContext {
        &self.auth
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Retrieves a resource or collection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on validation, transport, or server contract
    /// failure. An application-level error comes back as a normal
    /// response with `status = Error`.
    pub async fn get(
        &self,
        resource: &str,
        id: Option<ResourceId>,
        segments: PathSegments,
        filter: Option<Filter>,
    ) -> Result<ApiResponse, ApiError> {
        let mut builder = RequestSpec::builder(Method::Get, resource).path_segments(segments);
        if let Some(id) = id {
            builder = builder.id(id);
        }
        if let Some(filter) = filter {
            builder = builder.filter(filter);
        }
        self.run(builder.build()?).await
    }

    /// Creates a resource (or submits bulk data rows).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on validation, transport, or server contract
    /// failure.
    pub async fn create(
        &self,
        resource: &str,
        body: Value,
        id: Option<ResourceId>,
        segments: PathSegments,
    ) -> Result<ApiResponse, ApiError> {
        let mut builder = RequestSpec::builder(Method::Post, resource)
            .path_segments(segments)
            .body(body);
        if let Some(id) = id {
            builder = builder.id(id);
        }
        self.run(builder.build()?).await
    }

    /// Replaces a resource in full.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on validation, transport, or server contract
    /// failure.
    pub async fn replace(
        &self,
        resource: &str,
        id: ResourceId,
        body: Value,
        segments: PathSegments,
    ) -> Result<ApiResponse, ApiError> {
        let spec = RequestSpec::builder(Method::Put, resource)
            .id(id)
            .path_segments(segments)
            .body(body)
            .build()?;
        self.run(spec).await
    }

    /// Partially updates a resource.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on validation, transport, or server contract
    /// failure.
    pub async fn update(
        &self,
        resource: &str,
        id: ResourceId,
        body: Value,
        segments: PathSegments,
    ) -> Result<ApiResponse, ApiError> {
        let spec = RequestSpec::builder(Method::Patch, resource)
            .id(id)
            .path_segments(segments)
            .body(body)
            .build()?;
        self.run(spec).await
    }

    /// Removes a resource.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on validation, transport, or server contract
    /// failure.
    pub async fn remove(
        &self,
        resource: &str,
        id: ResourceId,
        segments: PathSegments,
    ) -> Result<ApiResponse, ApiError> {
        let spec = RequestSpec::builder(Method::Delete, resource)
            .id(id)
            .path_segments(segments)
            .build()?;
        self.run(spec).await
    }

    /// Executes independent specs concurrently, one result per spec.
    ///
    /// Every spec is signed with this client's authentication context; to
    /// mix credentials within a batch, use [`BatchExecutor`] directly.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnrecognizedStatus`] on a server contract
    /// violation. Per-request transport failures are recorded as Error
    /// results, not errors.
    pub async fn execute_batch(
        &self,
        specs: Vec<RequestSpec>,
    ) -> Result<Vec<ApiResponse>, ApiError> {
        let requests = specs
            .into_iter()
            .map(|spec| (spec, self.auth.clone()))
            .collect();
        BatchExecutor::new(self.transport.clone())
            .execute_all(requests)
            .await
    }

    async fn run(&self, spec: RequestSpec) -> Result<ApiResponse, ApiError> {
        let raw = self.transport.execute(&spec, &self.auth).await?;
        ApiResponse::from_raw(raw)
    }
}
