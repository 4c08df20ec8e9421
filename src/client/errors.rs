//! Error types for API operations.
//!
//! This module contains [`ApiError`], the single error type surfaced by every
//! client operation.
//!
//! # Error Handling
//!
//! Each request is a single exchange with no retries; every failure is
//! reported through the operation's `Result`, and none terminates the
//! process. URL construction errors short-circuit before any network call.
//!
//! # Example
//!
//! ```rust,ignore
//! use microcms_client::ApiError;
//!
//! match client.get("blogs", None, None).await {
//!     Ok(value) => println!("content: {value}"),
//!     Err(ApiError::Encoding { url }) => println!("bad endpoint: {url}"),
//!     Err(ApiError::Network(e)) => println!("network failure: {e}"),
//!     Err(ApiError::Parse(e)) => println!("malformed response: {e}"),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error type for microCMS API operations.
///
/// Variants map one-to-one to the failure points of a request: building the
/// URL, serializing the body, executing the exchange, and parsing the
/// response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint or content id could not form a valid URL.
    ///
    /// Returned before any network call is attempted.
    #[error("endpoint or parameter is invalid: {url}")]
    Encoding {
        /// The URL string that failed to parse.
        url: String,
    },

    /// The request body could not be serialized to JSON.
    #[error("failed to serialize request body")]
    Serialization(#[source] serde_json::Error),

    /// The transport reported a failure before a response body was available.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The transport completed but delivered no response body.
    ///
    /// A non-DELETE response with no body cannot be interpreted; it is
    /// reported explicitly rather than dropped.
    #[error("response completed without a body")]
    EmptyBody,

    /// The response body was not valid JSON.
    #[error("failed to parse response body")]
    Parse(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_error_includes_url() {
        let error = ApiError::Encoding {
            url: "https://bad url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("endpoint or parameter is invalid"));
        assert!(message.contains("https://bad url"));
    }

    #[test]
    fn test_serialization_error_carries_source() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = ApiError::Serialization(source);
        assert_eq!(error.to_string(), "failed to serialize request body");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_parse_error_carries_source() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = ApiError::Parse(source);
        assert_eq!(error.to_string(), "failed to parse response body");
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_empty_body_error_message() {
        let error = ApiError::EmptyBody;
        assert!(error.to_string().contains("without a body"));
    }

    #[test]
    fn test_all_variants_implement_std_error() {
        let encoding: &dyn std::error::Error = &ApiError::Encoding {
            url: "x".to_string(),
        };
        let _ = encoding;

        let empty: &dyn std::error::Error = &ApiError::EmptyBody;
        let _ = empty;
    }
}
