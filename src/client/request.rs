//! Resolved request types.
//!
//! This module provides the [`Method`] enum and the [`RequestSpec`] type, the
//! fully resolved form of a request before it is handed to the transport.

use std::collections::HashMap;
use std::fmt;

/// HTTP methods used by the microCMS content API.
///
/// Reads use [`Method::Get`]; writes use the remaining four.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// HTTP GET for retrieving content.
    Get,
    /// HTTP POST for creating content with a server-generated id.
    Post,
    /// HTTP PUT for creating content with a caller-chosen id.
    Put,
    /// HTTP PATCH for partially updating content.
    Patch,
    /// HTTP DELETE for removing content.
    Delete,
}

impl Method {
    /// Returns the uppercase wire name of this method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Returns true for the write methods (everything except GET).
    #[must_use]
    pub const fn is_write(&self) -> bool {
        !matches!(self, Self::Get)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Patch => Self::PATCH,
            Method::Delete => Self::DELETE,
        }
    }
}

/// A fully resolved request: method, absolute URL, headers, and body.
///
/// Built fresh for every call by
/// [`MicrocmsClient::make_get_request`](crate::MicrocmsClient::make_get_request)
/// and
/// [`MicrocmsClient::make_write_request`](crate::MicrocmsClient::make_write_request);
/// never reused or cached. The URL already carries the percent-encoded query
/// string, so a built `RequestSpec` can be inspected (or replayed) without
/// further assembly.
///
/// # Example
///
/// ```rust
/// use microcms_client::{ApiKey, MicrocmsClient, MicrocmsConfig, ServiceDomain};
///
/// let config = MicrocmsConfig::builder()
///     .service_domain(ServiceDomain::new("my-service").unwrap())
///     .api_key(ApiKey::new("key").unwrap())
///     .build()
///     .unwrap();
/// let client = MicrocmsClient::new(config);
///
/// let spec = client.make_get_request("blogs", None, None).unwrap();
/// assert_eq!(spec.url.as_str(), "https://my-service.microcms.io/api/v1/blogs");
/// ```
#[derive(Clone, Debug)]
pub struct RequestSpec {
    /// The HTTP method.
    pub method: Method,
    /// The absolute URL, query string included.
    pub url: reqwest::Url,
    /// Request headers. Keys are unique; order is irrelevant.
    pub headers: HashMap<String, String>,
    /// Serialized JSON body, if any.
    pub body: Option<Vec<u8>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_wire_names_are_uppercase() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Method::Put.as_str(), "PUT");
        assert_eq!(Method::Patch.as_str(), "PATCH");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }

    #[test]
    fn test_method_display_matches_as_str() {
        assert_eq!(Method::Patch.to_string(), "PATCH");
    }

    #[test]
    fn test_is_write_excludes_get() {
        assert!(!Method::Get.is_write());
        assert!(Method::Post.is_write());
        assert!(Method::Put.is_write());
        assert!(Method::Patch.is_write());
        assert!(Method::Delete.is_write());
    }

    #[test]
    fn test_method_converts_to_reqwest_method() {
        assert_eq!(reqwest::Method::from(Method::Get), reqwest::Method::GET);
        assert_eq!(reqwest::Method::from(Method::Patch), reqwest::Method::PATCH);
    }
}
