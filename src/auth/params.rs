//! Canonical parameter sets for request signing.
//!
//! A [`CanonicalParams`] collects every value a request signature covers:
//! the auth headers, the per-send nonce and timestamp, the assembled URL,
//! and the body fields. Signature determinism depends entirely on the
//! canonical form produced here, so the rules are strict:
//!
//! - keys are normalized to lower case on insertion
//! - serialization is in ascending key order
//! - string values that are themselves valid JSON numbers are stored as
//!   JSON numbers
//!
//! The numeric-coercion rule matches the server side's canonicalization.
//! A value serialized as `"5"` instead of `5` produces a different byte
//! string and therefore a different signature, so the coercion must be
//! applied consistently on every insert.

use std::collections::BTreeMap;

use serde_json::Value;

/// The key under which the assembled request URL is signed.
pub const URL_KEY: &str = "url";

/// The normalized, key-sorted collection of values covered by a signature.
///
/// Two logically-equal parameter sets built in different insertion orders
/// produce the same canonical JSON, and therefore the same signature.
///
/// # Example
///
/// ```rust
/// use roadsafety_api::auth::CanonicalParams;
///
/// let mut params = CanonicalParams::new();
/// params.insert("B", "2");
/// params.insert("a", "one");
///
/// // Keys are lower-cased and sorted; "2" is coerced to a JSON number.
/// assert_eq!(params.canonical_json(), r#"{"a":"one","b":2}"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CanonicalParams {
    entries: BTreeMap<String, Value>,
}

impl CanonicalParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, normalizing the key and coercing numeric strings.
    ///
    /// An existing entry under the same normalized key is replaced.
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<Value>) {
        let key = key.as_ref().to_lowercase();
        self.entries.insert(key, coerce_numeric(value.into()));
    }

    /// Inserts the assembled request URL under the reserved [`URL_KEY`].
    ///
    /// The URL signed here is the pre-filter-query form; the filter query
    /// string never participates in signing.
    pub fn insert_url(&mut self, url: impl Into<String>) {
        self.entries
            .insert(URL_KEY.to_string(), Value::String(url.into()));
    }

    /// Returns the value stored under a (normalized) key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(&key.to_lowercase())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the set to its canonical JSON form.
    ///
    /// This is the exact byte string the HMAC is computed over.
    #[must_use]
    pub fn canonical_json(&self) -> String {
        // BTreeMap iterates in ascending key order, which serde_json preserves.
        Value::Object(
            self.entries
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
        .to_string()
    }
}

/// Re-types a string value as a JSON number when it parses as one.
///
/// Only strings that are valid JSON number literals coerce (`"5"`,
/// `"-3.25"`, `"1e6"`); anything else (`"+1"`, `"05"`, `" 5"`, `"5 "`)
/// stays a string.
fn coerce_numeric(value: Value) -> Value {
    match value {
        Value::String(text) => match text.parse::<serde_json::Number>() {
            Ok(number) => Value::Number(number),
            Err(_) => Value::String(text),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keys_are_lower_cased() {
        let mut params = CanonicalParams::new();
        params.insert("Auth_Nonce", 1);

        assert!(params.get("auth_nonce").is_some());
        assert_eq!(params.canonical_json(), r#"{"auth_nonce":1}"#);
    }

    #[test]
    fn test_serialization_is_key_sorted() {
        let mut params = CanonicalParams::new();
        params.insert("zebra", "z");
        params.insert("apple", "a");
        params.insert("mango", "m");

        assert_eq!(
            params.canonical_json(),
            r#"{"apple":"a","mango":"m","zebra":"z"}"#
        );
    }

    #[test]
    fn test_insertion_order_does_not_affect_canonical_json() {
        let mut forward = CanonicalParams::new();
        forward.insert("a", 1);
        forward.insert("b", 2);
        forward.insert("c", "three");

        let mut reverse = CanonicalParams::new();
        reverse.insert("c", "three");
        reverse.insert("b", 2);
        reverse.insert("a", 1);

        assert_eq!(forward.canonical_json(), reverse.canonical_json());
    }

    #[test]
    fn test_numeric_strings_coerce_to_numbers() {
        let mut params = CanonicalParams::new();
        params.insert("int", "5");
        params.insert("neg", "-3");
        params.insert("float", "2.5");
        params.insert("exp", "1e3");

        assert_eq!(params.get("int"), Some(&json!(5)));
        assert_eq!(params.get("neg"), Some(&json!(-3)));
        assert_eq!(params.get("float"), Some(&json!(2.5)));
        assert_eq!(params.canonical_json().matches('"').count(), 8); // keys only quoted
    }

    #[test]
    fn test_non_json_number_strings_stay_strings() {
        let mut params = CanonicalParams::new();
        params.insert("plus", "+1");
        params.insert("padded", " 5");
        params.insert("leading_zero", "05");
        params.insert("word", "five");

        assert_eq!(params.get("plus"), Some(&json!("+1")));
        assert_eq!(params.get("padded"), Some(&json!(" 5")));
        assert_eq!(params.get("leading_zero"), Some(&json!("05")));
        assert_eq!(params.get("word"), Some(&json!("five")));
    }

    #[test]
    fn test_native_numbers_pass_through() {
        let mut params = CanonicalParams::new();
        params.insert("n", 17_u64);

        assert_eq!(params.get("n"), Some(&json!(17)));
    }

    #[test]
    fn test_insert_replaces_existing_key() {
        let mut params = CanonicalParams::new();
        params.insert("key", "first");
        params.insert("KEY", "second");

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("key"), Some(&json!("second")));
    }

    #[test]
    fn test_url_is_stored_verbatim() {
        let mut params = CanonicalParams::new();
        params.insert_url("https://api.example.org/v1/datasets/5");

        assert_eq!(
            params.get("url"),
            Some(&json!("https://api.example.org/v1/datasets/5"))
        );
    }

    #[test]
    fn test_empty_set_serializes_to_empty_object() {
        let params = CanonicalParams::new();
        assert!(params.is_empty());
        assert_eq!(params.canonical_json(), "{}");
    }
}
