//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated microCMS API key.
///
/// This newtype ensures the API key is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the key value, displaying only
/// `ApiKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use microcms_client::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated global draft key.
///
/// Used with [`DraftMode::GlobalKey`](crate::config::DraftMode::GlobalKey) to
/// request unpublished content on every read. Like [`ApiKey`], the value is
/// masked in debug output.
///
/// # Example
///
/// ```rust
/// use microcms_client::DraftKey;
///
/// let key = DraftKey::new("my-draft-key").unwrap();
/// assert_eq!(key.as_ref(), "my-draft-key");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct DraftKey(String);

impl DraftKey {
    /// Creates a new validated draft key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyDraftKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyDraftKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for DraftKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for DraftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DraftKey(*****)")
    }
}

/// A validated microCMS service domain.
///
/// This newtype validates and normalizes service domains to the full
/// `my-service.microcms.io` format.
///
/// # Accepted Formats
///
/// - `my-service` - normalized to `my-service.microcms.io`
/// - `my-service.microcms.io` - used as-is
///
/// # Serialization
///
/// `ServiceDomain` serializes to and deserializes from the full domain string:
///
/// ```rust
/// use microcms_client::ServiceDomain;
///
/// let domain = ServiceDomain::new("my-service").unwrap();
/// let json = serde_json::to_string(&domain).unwrap();
/// assert_eq!(json, r#""my-service.microcms.io""#);
/// ```
///
/// # Example
///
/// ```rust
/// use microcms_client::ServiceDomain;
///
/// // Short format is normalized
/// let domain = ServiceDomain::new("my-service").unwrap();
/// assert_eq!(domain.as_ref(), "my-service.microcms.io");
/// assert_eq!(domain.service_id(), "my-service");
///
/// // Full format is accepted
/// let domain = ServiceDomain::new("my-service.microcms.io").unwrap();
/// assert_eq!(domain.as_ref(), "my-service.microcms.io");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceDomain {
    full_domain: String,
    service_id_end: usize,
}

impl ServiceDomain {
    const SUFFIX: &'static str = ".microcms.io";

    /// Creates a new validated service domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidServiceDomain`] if the domain is invalid.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into();
        let domain = domain.trim().to_lowercase();

        if domain.is_empty() {
            return Err(ConfigError::InvalidServiceDomain { domain });
        }

        // Check if it's already a full domain
        let (service_id, full_domain) = if let Some(service_id) = domain.strip_suffix(Self::SUFFIX)
        {
            (service_id.to_string(), domain)
        } else if domain.contains('.') {
            // Contains a dot but not the microcms.io suffix - invalid
            return Err(ConfigError::InvalidServiceDomain { domain });
        } else {
            // Short format - needs normalization
            (domain.clone(), format!("{}{}", domain, Self::SUFFIX))
        };

        // Validate service id
        if !Self::is_valid_service_id(&service_id) {
            return Err(ConfigError::InvalidServiceDomain {
                domain: full_domain,
            });
        }

        Ok(Self {
            service_id_end: service_id.len(),
            full_domain,
        })
    }

    /// Returns the service id portion of the domain.
    ///
    /// For `my-service.microcms.io`, this returns `my-service`.
    #[must_use]
    pub fn service_id(&self) -> &str {
        &self.full_domain[..self.service_id_end]
    }

    fn is_valid_service_id(id: &str) -> bool {
        if id.is_empty() {
            return false;
        }

        // Service ids contain lowercase letters, numbers, and hyphens.
        // They cannot start or end with a hyphen.
        if id.starts_with('-') || id.ends_with('-') {
            return false;
        }

        id.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl AsRef<str> for ServiceDomain {
    fn as_ref(&self) -> &str {
        &self.full_domain
    }
}

impl Serialize for ServiceDomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.full_domain)
    }
}

impl<'de> Deserialize<'de> for ServiceDomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        let result = ApiKey::new("");
        assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("super-secret-key").unwrap();
        let debug_output = format!("{:?}", key);
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_draft_key_rejects_empty_string() {
        let result = DraftKey::new("");
        assert!(matches!(result, Err(ConfigError::EmptyDraftKey)));
    }

    #[test]
    fn test_draft_key_masks_value_in_debug() {
        let key = DraftKey::new("draft-secret").unwrap();
        let debug_output = format!("{:?}", key);
        assert_eq!(debug_output, "DraftKey(*****)");
        assert!(!debug_output.contains("draft-secret"));
    }

    #[test]
    fn test_service_domain_normalizes_short_format() {
        let domain = ServiceDomain::new("my-service").unwrap();
        assert_eq!(domain.as_ref(), "my-service.microcms.io");
        assert_eq!(domain.service_id(), "my-service");
    }

    #[test]
    fn test_service_domain_accepts_full_format() {
        let domain = ServiceDomain::new("my-service.microcms.io").unwrap();
        assert_eq!(domain.as_ref(), "my-service.microcms.io");
        assert_eq!(domain.service_id(), "my-service");
    }

    #[test]
    fn test_service_domain_rejects_invalid_domains() {
        // Empty
        assert!(ServiceDomain::new("").is_err());

        // Invalid characters
        assert!(ServiceDomain::new("my service").is_err());
        assert!(ServiceDomain::new("my_service").is_err());
        assert!(ServiceDomain::new("MY-SERVICE").is_ok()); // normalized to lowercase

        // Starting/ending with hyphen
        assert!(ServiceDomain::new("-my-service").is_err());
        assert!(ServiceDomain::new("my-service-").is_err());

        // Wrong domain suffix
        assert!(ServiceDomain::new("my-service.otherdomain.com").is_err());
    }

    #[test]
    fn test_service_domain_serializes_to_string() {
        let domain = ServiceDomain::new("my-service").unwrap();
        let json = serde_json::to_string(&domain).unwrap();
        assert_eq!(json, r#""my-service.microcms.io""#);
    }

    #[test]
    fn test_service_domain_deserializes_from_string() {
        let json = r#""test-service.microcms.io""#;
        let domain: ServiceDomain = serde_json::from_str(json).unwrap();
        assert_eq!(domain.as_ref(), "test-service.microcms.io");
        assert_eq!(domain.service_id(), "test-service");
    }

    #[test]
    fn test_service_domain_round_trip_serialization() {
        let original = ServiceDomain::new("my-service").unwrap();
        let json = serde_json::to_string(&original).unwrap();
        let restored: ServiceDomain = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
