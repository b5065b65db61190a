//! Server-side result filters.
//!
//! A [`Filter`] is either a single `{field, operator, value}` predicate or
//! a boolean combination (AND/OR) of nested filters. A filter travels with
//! a request twice: URL-encoded in the `?filter=` query parameter (which
//! drives server-side filtering) and as raw JSON in the `filter` header
//! (which is logged and validated server-side, and participates in
//! signing). Both forms decode to the identical JSON structure because
//! they are produced from the same serialization.

use serde_json::Value;
use std::fmt;

/// Comparison operator of a single filter predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterOperator {
    /// Equal to.
    Eq,
    /// Not equal to.
    Ne,
    /// Greater than.
    Gt,
    /// Greater than or equal to.
    Ge,
    /// Less than.
    Lt,
    /// Less than or equal to.
    Le,
    /// SQL-style pattern match.
    Like,
}

impl FilterOperator {
    /// Returns the wire form of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Like => "LIKE",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boolean combinator for nested filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupOperator {
    /// All nested filters must match.
    And,
    /// At least one nested filter must match.
    Or,
}

impl GroupOperator {
    /// Returns the wire form of the combinator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for GroupOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A predicate or boolean combination of predicates.
///
/// # Example
///
/// ```rust
/// use roadsafety_api::{Filter, FilterOperator};
///
/// let filter = Filter::all(vec![
///     Filter::new("country", FilterOperator::Eq, "NZ"),
///     Filter::new("fatalities", FilterOperator::Gt, 10),
/// ]);
///
/// let json = filter.to_header_json();
/// assert!(json.contains(r#""operator":"AND""#));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    /// A single `{field, operator, value}` predicate.
    Condition {
        /// The field the predicate applies to.
        field: String,
        /// The comparison operator.
        operator: FilterOperator,
        /// The value compared against.
        value: Value,
    },
    /// A boolean combination of nested filters.
    Group {
        /// The boolean combinator.
        operator: GroupOperator,
        /// The nested filters, applied in order.
        filters: Vec<Filter>,
    },
}

impl Filter {
    /// Creates a single predicate.
    pub fn new(field: impl Into<String>, operator: FilterOperator, value: impl Into<Value>) -> Self {
        Self::Condition {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// Combines filters so that all must match.
    #[must_use]
    pub const fn all(filters: Vec<Self>) -> Self {
        Self::Group {
            operator: GroupOperator::And,
            filters,
        }
    }

    /// Combines filters so that any may match.
    #[must_use]
    pub const fn any(filters: Vec<Self>) -> Self {
        Self::Group {
            operator: GroupOperator::Or,
            filters,
        }
    }

    /// Returns the JSON representation of this filter.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        match self {
            Self::Condition {
                field,
                operator,
                value,
            } => serde_json::json!({
                "field": field,
                "operator": operator.as_str(),
                "value": value,
            }),
            Self::Group { operator, filters } => serde_json::json!({
                "operator": operator.as_str(),
                "filters": filters.iter().map(Self::to_json_value).collect::<Vec<_>>(),
            }),
        }
    }

    /// Returns the raw JSON form carried in the `filter` header.
    #[must_use]
    pub fn to_header_json(&self) -> String {
        self.to_json_value().to_string()
    }

    /// Returns the URL-encoded form carried in the `?filter=` query parameter.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        urlencoding::encode(&self.to_header_json()).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Filter {
        Filter::all(vec![
            Filter::new("country", FilterOperator::Eq, "NZ"),
            Filter::any(vec![
                Filter::new("fatalities", FilterOperator::Gt, 10),
                Filter::new("star_rating", FilterOperator::Le, 2),
            ]),
        ])
    }

    #[test]
    fn test_condition_json_shape() {
        let filter = Filter::new("region_id", FilterOperator::Eq, 5);
        assert_eq!(
            filter.to_json_value(),
            json!({"field": "region_id", "operator": "=", "value": 5})
        );
    }

    #[test]
    fn test_group_json_shape() {
        let filter = Filter::any(vec![Filter::new("a", FilterOperator::Ne, 1)]);
        assert_eq!(
            filter.to_json_value(),
            json!({
                "operator": "OR",
                "filters": [{"field": "a", "operator": "!=", "value": 1}],
            })
        );
    }

    #[test]
    fn test_nested_groups_serialize_recursively() {
        let value = sample().to_json_value();
        assert_eq!(value["operator"], "AND");
        assert_eq!(value["filters"][1]["operator"], "OR");
        assert_eq!(value["filters"][1]["filters"][0]["field"], "fatalities");
    }

    #[test]
    fn test_query_string_decodes_to_header_json() {
        let filter = sample();
        let query = filter.to_query_string();
        let decoded = urlencoding::decode(&query).unwrap();

        let from_query: Value = serde_json::from_str(&decoded).unwrap();
        let from_header: Value = serde_json::from_str(&filter.to_header_json()).unwrap();
        assert_eq!(from_query, from_header);
    }

    #[test]
    fn test_query_string_is_url_safe() {
        let query = sample().to_query_string();
        assert!(!query.contains('{'));
        assert!(!query.contains('"'));
        assert!(!query.contains(' '));
    }

    #[test]
    fn test_operator_wire_forms() {
        assert_eq!(FilterOperator::Eq.to_string(), "=");
        assert_eq!(FilterOperator::Ne.to_string(), "!=");
        assert_eq!(FilterOperator::Gt.to_string(), ">");
        assert_eq!(FilterOperator::Ge.to_string(), ">=");
        assert_eq!(FilterOperator::Lt.to_string(), "<");
        assert_eq!(FilterOperator::Le.to_string(), "<=");
        assert_eq!(FilterOperator::Like.to_string(), "LIKE");
        assert_eq!(GroupOperator::And.to_string(), "AND");
        assert_eq!(GroupOperator::Or.to_string(), "OR");
    }
}
