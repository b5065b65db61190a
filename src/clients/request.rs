//! Request construction.
//!
//! A [`RequestSpec`] captures one logical API call: method, resource path,
//! optional id, optional extra path segments, optional filter, and
//! optional body. Specs are built once via [`RequestSpec::builder`],
//! immutable after construction, and consumed by the transport.
//!
//! URL assembly order is `{base}/{version}/{resource}[/{id}][/{segment}...]`,
//! with empty parts simply omitted. The filter is never part of the path;
//! it is appended as a `?filter=<urlencoded-json>` query string, and the
//! pre-filter URL is what participates in signing.

use std::fmt;

use serde_json::Value;

use crate::clients::errors::InvalidRequestError;
use crate::filter::Filter;

/// HTTP methods supported by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// HTTP GET for retrieving resources.
    Get,
    /// HTTP POST for creating resources.
    Post,
    /// HTTP PUT for replacing resources.
    Put,
    /// HTTP PATCH for partially updating resources.
    Patch,
    /// HTTP DELETE for removing resources.
    Delete,
}

impl Method {
    /// Returns `true` if this method sends a request body.
    ///
    /// GET and DELETE carry no body; a body argument supplied for either
    /// is ignored at build time.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A resource identifier: numeric for most resources, string for a few.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourceId {
    /// A numeric id.
    Int(u64),
    /// A string id.
    Str(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Str(id) => f.write_str(id),
        }
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        Self::Int(id)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self::Str(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self::Str(id)
    }
}

/// Extra path segments appended after the resource path and id.
///
/// An explicit variant type: no segments, a single segment, or an ordered
/// sequence joined by `/`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PathSegments {
    /// No extra segments.
    #[default]
    None,
    /// One extra segment.
    Single(ResourceId),
    /// An ordered sequence of segments.
    Many(Vec<ResourceId>),
}

impl PathSegments {
    /// Appends the segments to a path, each prefixed with `/`.
    fn write_to(&self, path: &mut String) {
        use std::fmt::Write;
        match self {
            Self::None => {}
            Self::Single(segment) => {
                let _ = write!(path, "/{segment}");
            }
            Self::Many(segments) => {
                for segment in segments {
                    let _ = write!(path, "/{segment}");
                }
            }
        }
    }
}

/// A request body: a keyed object or an ordered sequence of rows.
///
/// Bulk positional rows (no explicit keys) pass through unmodified as a
/// JSON array. Rows where any element carries explicit keys are
/// JSON-encoded as a string nested under a `data` field, so the server can
/// distinguish the two payload shapes.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// A keyed JSON object.
    Keyed(serde_json::Map<String, Value>),
    /// An ordered sequence of rows.
    Rows(Vec<Value>),
}

impl RequestBody {
    /// Builds a body from a JSON value, accepting either form transparently.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::InvalidBody`] for scalar values.
    pub fn from_value(value: Value) -> Result<Self, InvalidRequestError> {
        match value {
            Value::Object(map) => Ok(Self::Keyed(map)),
            Value::Array(rows) => Ok(Self::Rows(rows)),
            _ => Err(InvalidRequestError::InvalidBody),
        }
    }

    /// Returns `true` if any row carries explicit keys.
    fn has_keyed_rows(rows: &[Value]) -> bool {
        rows.iter().any(Value::is_object)
    }

    /// Returns the JSON value sent on the wire.
    #[must_use]
    pub fn wire_value(&self) -> Value {
        match self {
            Self::Keyed(map) => Value::Object(map.clone()),
            Self::Rows(rows) => {
                if Self::has_keyed_rows(rows) {
                    let encoded = Value::Array(rows.clone()).to_string();
                    serde_json::json!({ "data": encoded })
                } else {
                    Value::Array(rows.clone())
                }
            }
        }
    }

    /// Returns the named fields this body contributes to signing.
    ///
    /// A keyed object contributes its top-level fields; a wrapped row
    /// payload contributes its single `data` field; a positional array has
    /// no named fields and contributes nothing.
    #[must_use]
    pub fn signable_fields(&self) -> Vec<(String, Value)> {
        match self.wire_value() {
            Value::Object(map) => map.into_iter().collect(),
            _ => Vec::new(),
        }
    }
}

/// One logical API call, immutable after construction.
///
/// # Example
///
/// ```rust
/// use roadsafety_api::{Method, RequestSpec};
///
/// let spec = RequestSpec::builder(Method::Get, "datasets")
///     .id(5_u64)
///     .segment("for")
///     .segment("region")
///     .segment(2_u64)
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     spec.signing_url("https://api.example.org", "v1"),
///     "https://api.example.org/v1/datasets/5/for/region/2"
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RequestSpec {
    method: Method,
    resource: String,
    id: Option<ResourceId>,
    segments: PathSegments,
    filter: Option<Filter>,
    body: Option<RequestBody>,
}

impl RequestSpec {
    /// Creates a new builder for the given method and resource path.
    #[must_use]
    pub fn builder(method: Method, resource: impl Into<String>) -> RequestSpecBuilder {
        RequestSpecBuilder::new(method, resource)
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Returns the resource path.
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Returns the resource id, if any.
    #[must_use]
    pub const fn id(&self) -> Option<&ResourceId> {
        self.id.as_ref()
    }

    /// Returns the extra path segments.
    #[must_use]
    pub const fn segments(&self) -> &PathSegments {
        &self.segments
    }

    /// Returns the filter, if any.
    #[must_use]
    pub const fn filter(&self) -> Option<&Filter> {
        self.filter.as_ref()
    }

    /// Returns the body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    /// Assembles the URL that participates in signing.
    ///
    /// This is the full request URL *without* the filter query string: the
    /// filter query must never affect the signature, only the `filter`
    /// header value does.
    #[must_use]
    pub fn signing_url(&self, base_url: &str, version: &str) -> String {
        use std::fmt::Write;

        let mut url = format!("{base_url}/{version}/{}", self.resource);
        if let Some(id) = &self.id {
            let _ = write!(url, "/{id}");
        }
        self.segments.write_to(&mut url);
        url
    }

    /// Assembles the URL the request is actually sent to.
    ///
    /// Identical to [`signing_url`](Self::signing_url) plus the
    /// `?filter=<urlencoded-json>` query string when a filter is attached.
    #[must_use]
    pub fn request_url(&self, base_url: &str, version: &str) -> String {
        let mut url = self.signing_url(base_url, version);
        if let Some(filter) = &self.filter {
            use std::fmt::Write;
            let _ = write!(url, "?filter={}", filter.to_query_string());
        }
        url
    }
}

/// Builder for [`RequestSpec`] instances.
#[derive(Debug)]
pub struct RequestSpecBuilder {
    method: Method,
    resource: String,
    id: Option<ResourceId>,
    segments: Vec<ResourceId>,
    filter: Option<Filter>,
    body: Option<Value>,
}

impl RequestSpecBuilder {
    fn new(method: Method, resource: impl Into<String>) -> Self {
        Self {
            method,
            resource: resource.into(),
            id: None,
            segments: Vec::new(),
            filter: None,
            body: None,
        }
    }

    /// Sets the resource id.
    #[must_use]
    pub fn id(mut self, id: impl Into<ResourceId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Appends one extra path segment.
    #[must_use]
    pub fn segment(mut self, segment: impl Into<ResourceId>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Sets all extra path segments at once, replacing any appended so far.
    #[must_use]
    pub fn segments(mut self, segments: Vec<ResourceId>) -> Self {
        self.segments = segments;
        self
    }

    /// Sets the extra path segments from an explicit [`PathSegments`] value.
    #[must_use]
    pub fn path_segments(mut self, segments: PathSegments) -> Self {
        self.segments = match segments {
            PathSegments::None => Vec::new(),
            PathSegments::Single(segment) => vec![segment],
            PathSegments::Many(segments) => segments,
        };
        self
    }

    /// Attaches a filter.
    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Attaches a body value (a JSON object or an array of rows).
    ///
    /// Ignored for GET and DELETE, which carry no body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the [`RequestSpec`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::MissingBody`] if the method requires
    /// a body and none was supplied, or
    /// [`InvalidRequestError::InvalidBody`] if the body is a scalar.
    pub fn build(self) -> Result<RequestSpec, InvalidRequestError> {
        let body = if self.method.has_body() {
            match self.body {
                Some(value) => Some(RequestBody::from_value(value)?),
                None => {
                    return Err(InvalidRequestError::MissingBody {
                        method: self.method.to_string(),
                    })
                }
            }
        } else {
            None
        };

        let segments = match self.segments.len() {
            0 => PathSegments::None,
            1 => PathSegments::Single(
                self.segments.into_iter().next().unwrap_or(ResourceId::Int(0)),
            ),
            _ => PathSegments::Many(self.segments),
        };

        Ok(RequestSpec {
            method: self.method,
            resource: self.resource,
            id: self.id,
            segments,
            filter: self.filter,
            body,
        })
    }
}
