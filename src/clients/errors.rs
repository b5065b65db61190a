//! Request-time error types.
//!
//! The SDK resolves almost every failure into an
//! [`ApiResponse`](crate::clients::ApiResponse) value rather than an error:
//! application-level errors and malformed responses both come back as a
//! response with `status = Error`. The error types here cover the cases
//! that cannot be represented as a response:
//!
//! - [`InvalidRequestError`]: a request failed validation before sending
//! - [`ApiError::Network`]: the transport could not complete the call
//! - [`ApiError::UnrecognizedStatus`]: the server returned a status
//!   literal the client cannot safely interpret
//!
//! # Example
//!
//! ```rust,ignore
//! use roadsafety_api::ApiError;
//!
//! match transport.execute(&spec, &auth).await {
//!     Ok(raw) => { /* parse into an ApiResponse */ }
//!     Err(ApiError::Network(e)) => println!("transport failed: {e}"),
//!     Err(other) => println!("{other}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request fails validation before sending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// A POST, PUT, or PATCH request was built without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The body is neither a keyed object nor a sequence of rows.
    #[error("Request body must be a JSON object or an array of rows.")]
    InvalidBody,
}

/// Unified error type for request construction and execution.
///
/// Use pattern matching to handle specific failures. Note that an
/// application-level `Status: Error` response is NOT an `ApiError`; it is
/// returned as a normal [`ApiResponse`](crate::clients::ApiResponse) with
/// `status = Error`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server returned a status literal other than `Success` or `Error`.
    ///
    /// This indicates a server contract violation the client cannot safely
    /// interpret, so it is fatal rather than recovered into a response.
    #[error("Unrecognized response status '{status}'. Expected 'Success' or 'Error'.")]
    UnrecognizedStatus {
        /// The unexpected status literal.
        status: String,
    },
}
