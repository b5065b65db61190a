//! Response decomposition and parsing.
//!
//! The transport hands back a [`RawResponse`]: the HTTP status code (when
//! one was received), the response header entries, and the raw body text.
//! [`ApiResponse::from_raw`] turns that into the structured result callers
//! work with.
//!
//! Parsing rules:
//!
//! - header names are normalized to lowercase at construction (the HTTP
//!   layer's canonical form); lookups are exact matches over the
//!   normalized names, first occurrence wins per key
//! - the `status` header value must be exactly `"Success"` or `"Error"`;
//!   any other literal is a fatal construction error
//! - a response with no recoverable status code or no `status` header is
//!   recovered into an Error result with a synthetic message, never
//!   propagated as a transport error

use serde_json::Value;
use std::fmt;

use crate::clients::errors::ApiError;

/// Synthetic error message attached when no status was recoverable.
pub const NO_RESPONSE_ERROR: &str = "server did not respond as expected";

/// Response header carrying the application-level status literal.
pub const STATUS_HEADER: &str = "status";

/// Response header carrying the application-level error message.
pub const ERROR_HEADER: &str = "error";

/// The undecomposed output of one completed transport call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    code: Option<u16>,
    headers: Vec<(String, String)>,
    body: String,
}

impl RawResponse {
    /// Creates a raw response, normalizing header names to lowercase.
    ///
    /// `code` is `None` when no status line was recoverable from the wire.
    #[must_use]
    pub fn new(code: Option<u16>, headers: Vec<(String, String)>, body: impl Into<String>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, value)| (name.to_lowercase(), value))
            .collect();
        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Returns the HTTP status code, if one was received.
    #[must_use]
    pub const fn code(&self) -> Option<u16> {
        self.code
    }

    /// Returns the first value of a header, matched over normalized names.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header_name, _)| header_name == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the raw body text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// The application-level outcome of a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseStatus {
    /// The server reported success.
    Success,
    /// The server reported an error, or no usable response arrived.
    Error,
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("Success"),
            Self::Error => f.write_str("Error"),
        }
    }
}

/// The structured result of one API call.
///
/// Constructed exactly once, immediately after a transport completes, and
/// immutable thereafter. Callers distinguish "request never reached the
/// server" from "server responded with an application error" via the
/// `error` field and HTTP code, not via control flow.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    /// The HTTP status code (0 when no status line was recoverable).
    pub code: u16,
    /// The application-level outcome.
    pub status: ResponseStatus,
    /// The JSON-decoded body, when decoding succeeded.
    ///
    /// A body that legitimately decodes to `[]` or `false` is stored
    /// as-is; only an undecodable body is `None`.
    pub body: Option<Value>,
    /// The raw body text, always retained.
    pub raw_body: String,
    /// The application-level error message, if one was reported.
    pub error: Option<String>,
}

impl ApiResponse {
    /// Parses a raw transport response into a structured result.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnrecognizedStatus`] when the `status` header
    /// carries a literal other than `"Success"` or `"Error"`, which is a
    /// server contract violation the client cannot safely interpret.
    pub fn from_raw(raw: RawResponse) -> Result<Self, ApiError> {
        let body = serde_json::from_str(raw.body()).ok();
        let error = raw.header(ERROR_HEADER).map(ToString::to_string);

        let status = match (raw.code(), raw.header(STATUS_HEADER)) {
            (Some(_), Some("Success")) => ResponseStatus::Success,
            (Some(_), Some("Error")) => ResponseStatus::Error,
            (Some(_), Some(other)) => {
                return Err(ApiError::UnrecognizedStatus {
                    status: other.to_string(),
                })
            }
            // No status line or no status header: recover into an Error
            // result with a synthetic message.
            (None, _) | (_, None) => {
                return Ok(Self {
                    code: raw.code().unwrap_or(0),
                    status: ResponseStatus::Error,
                    body,
                    raw_body: raw.body().to_string(),
                    error: Some(NO_RESPONSE_ERROR.to_string()),
                });
            }
        };

        Ok(Self {
            code: raw.code().unwrap_or(0),
            status,
            body,
            raw_body: raw.body().to_string(),
            error,
        })
    }

    /// Builds the Error result recorded for a request whose transport
    /// failed inside a batch.
    pub(crate) fn transport_failure(message: impl Into<String>) -> Self {
        Self {
            code: 0,
            status: ResponseStatus::Error,
            body: None,
            raw_body: String::new(),
            error: Some(message.into()),
        }
    }

    /// Returns `true` if the server reported success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status, ResponseStatus::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(code: Option<u16>, headers: &[(&str, &str)], body: &str) -> RawResponse {
        RawResponse::new(
            code,
            headers
                .iter()
                .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
                .collect(),
            body,
        )
    }

    #[test]
    fn test_success_with_empty_array_body() {
        let response =
            ApiResponse::from_raw(raw(Some(200), &[("Status", "Success")], "[]")).unwrap();

        assert_eq!(response.code, 200);
        assert_eq!(response.status, ResponseStatus::Success);
        // An empty sequence is a valid decode, not a missing body.
        assert_eq!(response.body, Some(json!([])));
        assert_eq!(response.raw_body, "[]");
        assert!(response.error.is_none());
    }

    #[test]
    fn test_false_body_is_a_valid_decode() {
        let response =
            ApiResponse::from_raw(raw(Some(200), &[("Status", "Success")], "false")).unwrap();
        assert_eq!(response.body, Some(json!(false)));
    }

    #[test]
    fn test_undecodable_body_keeps_raw_text() {
        let response =
            ApiResponse::from_raw(raw(Some(200), &[("Status", "Success")], "<html>oops</html>"))
                .unwrap();

        assert!(response.body.is_none());
        assert_eq!(response.raw_body, "<html>oops</html>");
    }

    #[test]
    fn test_error_status_with_error_header() {
        let response = ApiResponse::from_raw(raw(
            Some(403),
            &[("Status", "Error"), ("Error", "permission denied")],
            "{}",
        ))
        .unwrap();

        assert_eq!(response.status, ResponseStatus::Error);
        assert_eq!(response.error.as_deref(), Some("permission denied"));
        assert_eq!(response.code, 403);
    }

    #[test]
    fn test_missing_status_header_recovers_with_synthetic_error() {
        let response = ApiResponse::from_raw(raw(Some(200), &[], "{}")).unwrap();

        assert_eq!(response.status, ResponseStatus::Error);
        assert_eq!(response.error.as_deref(), Some(NO_RESPONSE_ERROR));
    }

    #[test]
    fn test_missing_status_line_recovers_with_code_zero() {
        let response = ApiResponse::from_raw(raw(None, &[], "")).unwrap();

        assert_eq!(response.code, 0);
        assert_eq!(response.status, ResponseStatus::Error);
        assert_eq!(response.error.as_deref(), Some(NO_RESPONSE_ERROR));
        assert!(response.body.is_none());
    }

    #[test]
    fn test_unrecognized_status_literal_is_fatal() {
        let result = ApiResponse::from_raw(raw(Some(200), &[("Status", "Pending")], "{}"));

        assert!(matches!(
            result,
            Err(ApiError::UnrecognizedStatus { status }) if status == "Pending"
        ));
    }

    #[test]
    fn test_status_value_match_is_case_sensitive() {
        // "success" is not the literal the contract names.
        let result = ApiResponse::from_raw(raw(Some(200), &[("Status", "success")], "{}"));
        assert!(matches!(result, Err(ApiError::UnrecognizedStatus { .. })));
    }

    #[test]
    fn test_first_occurrence_wins_per_header() {
        let response = ApiResponse::from_raw(raw(
            Some(500),
            &[
                ("Status", "Error"),
                ("Error", "first message"),
                ("Error", "second message"),
            ],
            "{}",
        ))
        .unwrap();

        assert_eq!(response.error.as_deref(), Some("first message"));
    }

    #[test]
    fn test_header_names_are_normalized_at_construction() {
        let response =
            ApiResponse::from_raw(raw(Some(200), &[("STATUS", "Success")], "{}")).unwrap();
        assert_eq!(response.status, ResponseStatus::Success);
    }

    #[test]
    fn test_is_success() {
        let success =
            ApiResponse::from_raw(raw(Some(200), &[("Status", "Success")], "{}")).unwrap();
        let failure = ApiResponse::transport_failure("could not resolve host");

        assert!(success.is_success());
        assert!(!failure.is_success());
        assert_eq!(failure.code, 0);
    }
}
