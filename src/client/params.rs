//! Query parameters for content reads.
//!
//! This module provides the [`GetParameter`] type, a closed set of the
//! filtering, sorting, and pagination options accepted by the microCMS
//! content API.

/// A single query parameter for a content read.
///
/// Each variant encodes to exactly one `key=value` query item via
/// [`as_query_pair`](Self::as_query_pair). Values are kept verbatim here;
/// percent-encoding is applied when the URL is assembled.
///
/// # Example
///
/// ```rust
/// use microcms_client::GetParameter;
///
/// let param = GetParameter::Orders(vec!["publishedAt".into(), "-updatedAt".into()]);
/// assert_eq!(param.as_query_pair(), ("orders", "publishedAt,-updatedAt".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GetParameter {
    /// Fields to retrieve from the content.
    ///
    /// Nested fields use dot notation, e.g. `author.name`.
    Fields(Vec<String>),

    /// Depth of reference-content resolution. Default is 1, maximum is 3.
    Depth(u8),

    /// Number of list items to retrieve. Default is 10.
    Limit(u32),

    /// List offset. Default is 0.
    Offset(u32),

    /// Sort order for list results.
    ///
    /// Prefix a field name with `-` for descending order, e.g.
    /// `["publishedAt", "-updatedAt"]`. Only date, boolean, and numeric
    /// fields are sortable; other fields are ignored by the API.
    Orders(Vec<String>),

    /// Full-text search over text fields, text areas, and rich editors.
    Q(String),

    /// Restrict list results to the given content ids.
    Ids(Vec<String>),

    /// Filter expression, e.g. `createdAt[greater_than]2019-11`.
    ///
    /// See the microCMS API reference for available conditions:
    /// <https://document.microcms.io/content-api/get-list-contents#hdebbdc8e86>
    Filters(String),
}

impl GetParameter {
    /// Returns this parameter as a query key/value pair.
    ///
    /// Total over all variants; never fails and has no side effects.
    #[must_use]
    pub fn as_query_pair(&self) -> (&'static str, String) {
        match self {
            Self::Fields(values) => ("fields", values.join(",")),
            Self::Depth(value) => ("depth", value.to_string()),
            Self::Limit(value) => ("limit", value.to_string()),
            Self::Offset(value) => ("offset", value.to_string()),
            Self::Orders(values) => ("orders", values.join(",")),
            Self::Q(value) => ("q", value.clone()),
            Self::Ids(values) => ("ids", values.join(",")),
            Self::Filters(value) => ("filters", value.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_joins_with_comma() {
        let param = GetParameter::Fields(vec!["id".into(), "publishedAt".into()]);
        assert_eq!(param.as_query_pair(), ("fields", "id,publishedAt".to_string()));
    }

    #[test]
    fn test_fields_single_element_has_no_separator() {
        let param = GetParameter::Fields(vec!["title".into()]);
        assert_eq!(param.as_query_pair(), ("fields", "title".to_string()));
    }

    #[test]
    fn test_numeric_parameters_encode_as_decimal() {
        assert_eq!(GetParameter::Depth(2).as_query_pair(), ("depth", "2".to_string()));
        assert_eq!(GetParameter::Limit(50).as_query_pair(), ("limit", "50".to_string()));
        assert_eq!(GetParameter::Offset(0).as_query_pair(), ("offset", "0".to_string()));
    }

    #[test]
    fn test_orders_preserves_descending_prefix() {
        let param = GetParameter::Orders(vec!["publishedAt".into(), "-updatedAt".into()]);
        assert_eq!(
            param.as_query_pair(),
            ("orders", "publishedAt,-updatedAt".to_string())
        );
    }

    #[test]
    fn test_q_is_verbatim() {
        let param = GetParameter::Q("test query".into());
        assert_eq!(param.as_query_pair(), ("q", "test query".to_string()));
    }

    #[test]
    fn test_ids_joins_with_comma() {
        let param = GetParameter::Ids(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(param.as_query_pair(), ("ids", "a,b,c".to_string()));
    }

    #[test]
    fn test_filters_keeps_brackets_unencoded() {
        let param = GetParameter::Filters("createdAt[greater_than]2019-11".into());
        assert_eq!(
            param.as_query_pair(),
            ("filters", "createdAt[greater_than]2019-11".to_string())
        );
    }

    #[test]
    fn test_empty_list_encodes_to_empty_value() {
        let param = GetParameter::Fields(vec![]);
        assert_eq!(param.as_query_pair(), ("fields", String::new()));
    }
}
