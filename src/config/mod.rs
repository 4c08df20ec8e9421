//! Configuration types for the microCMS SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with microCMS.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`MicrocmsConfig`]: The main configuration struct holding all SDK settings
//! - [`MicrocmsConfigBuilder`]: A builder for constructing [`MicrocmsConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`DraftKey`]: A validated global draft key newtype
//! - [`ServiceDomain`]: A validated microCMS service domain
//! - [`DraftMode`]: How draft content is requested
//!
//! # Example
//!
//! ```rust
//! use microcms_client::{MicrocmsConfig, ApiKey, ServiceDomain};
//!
//! let config = MicrocmsConfig::builder()
//!     .service_domain(ServiceDomain::new("my-service").unwrap())
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, DraftKey, ServiceDomain};

use crate::error::ConfigError;

/// Default header name carrying the API key.
pub const DEFAULT_API_KEY_HEADER: &str = "X-MICROCMS-API-KEY";

/// Header name carrying the global draft key in the legacy variant.
pub const GLOBAL_DRAFT_KEY_HEADER: &str = "X-MICROCMS-GLOBAL-DRAFT-KEY";

/// How the SDK requests draft (unpublished) content.
///
/// The microCMS API historically supported two mechanisms, and they must not
/// be mixed on one client:
///
/// - [`DraftMode::QueryFlag`]: the current mechanism. Write operations accept
///   a per-call draft flag, which adds `status=draft` to the query string.
/// - [`DraftMode::GlobalKey`]: the legacy mechanism. A service-wide draft key
///   is attached as the `X-MICROCMS-GLOBAL-DRAFT-KEY` header on every read
///   request, making drafts visible to all reads from this client.
///
/// # Example
///
/// ```rust
/// use microcms_client::{DraftKey, DraftMode};
///
/// let current = DraftMode::QueryFlag;
/// let legacy = DraftMode::GlobalKey(DraftKey::new("draft-key").unwrap());
/// assert_ne!(current, legacy);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DraftMode {
    /// Per-call draft flag adding `status=draft` to the query string (default).
    #[default]
    QueryFlag,
    /// Global draft key sent as a header on every read request.
    GlobalKey(DraftKey),
}

/// Configuration for the microCMS SDK.
///
/// This struct holds all configuration needed for SDK operations: the tenant
/// service domain, the API key, the header name carrying the key, and the
/// draft-content mechanism. It is immutable after construction.
///
/// # Thread Safety
///
/// `MicrocmsConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use microcms_client::{MicrocmsConfig, ApiKey, ServiceDomain};
///
/// let config = MicrocmsConfig::builder()
///     .service_domain(ServiceDomain::new("my-service").unwrap())
///     .api_key(ApiKey::new("my-api-key").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_key_header_name(), "X-MICROCMS-API-KEY");
/// ```
#[derive(Clone, Debug)]
pub struct MicrocmsConfig {
    service_domain: ServiceDomain,
    api_key: ApiKey,
    api_key_header_name: String,
    draft_mode: DraftMode,
    host: Option<String>,
}

impl MicrocmsConfig {
    /// Creates a new builder for constructing a `MicrocmsConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use microcms_client::{MicrocmsConfig, ApiKey, ServiceDomain};
    ///
    /// let config = MicrocmsConfig::builder()
    ///     .service_domain(ServiceDomain::new("my-service").unwrap())
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> MicrocmsConfigBuilder {
        MicrocmsConfigBuilder::new()
    }

    /// Returns the service domain.
    #[must_use]
    pub const fn service_domain(&self) -> &ServiceDomain {
        &self.service_domain
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the header name carrying the API key.
    #[must_use]
    pub fn api_key_header_name(&self) -> &str {
        &self.api_key_header_name
    }

    /// Returns the draft-content mechanism.
    #[must_use]
    pub const fn draft_mode(&self) -> &DraftMode {
        &self.draft_mode
    }

    /// Returns the host override, if configured.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }
}

// Verify MicrocmsConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MicrocmsConfig>();
};

/// Builder for constructing [`MicrocmsConfig`] instances.
///
/// This builder provides a fluent API for configuring the SDK. Required fields
/// are `service_domain` and `api_key`. All other fields have sensible defaults.
///
/// # Defaults
///
/// - `api_key_header_name`: `X-MICROCMS-API-KEY`
/// - `draft_mode`: [`DraftMode::QueryFlag`]
///
/// # Example
///
/// ```rust
/// use microcms_client::{MicrocmsConfig, ApiKey, DraftKey, DraftMode, ServiceDomain};
///
/// let config = MicrocmsConfig::builder()
///     .service_domain(ServiceDomain::new("my-service").unwrap())
///     .api_key(ApiKey::new("key").unwrap())
///     .api_key_header_name("X-API-KEY")
///     .draft_mode(DraftMode::GlobalKey(DraftKey::new("draft-key").unwrap()))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MicrocmsConfigBuilder {
    service_domain: Option<ServiceDomain>,
    api_key: Option<ApiKey>,
    api_key_header_name: Option<String>,
    draft_mode: Option<DraftMode>,
    host: Option<String>,
}

impl MicrocmsConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the service domain (required).
    #[must_use]
    pub fn service_domain(mut self, domain: ServiceDomain) -> Self {
        self.service_domain = Some(domain);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the header name carrying the API key.
    ///
    /// Defaults to `X-MICROCMS-API-KEY`. Older services accepted `X-API-KEY`;
    /// set this only when talking to an API that still requires the old name.
    #[must_use]
    pub fn api_key_header_name(mut self, name: impl Into<String>) -> Self {
        self.api_key_header_name = Some(name.into());
        self
    }

    /// Sets the draft-content mechanism.
    ///
    /// Defaults to [`DraftMode::QueryFlag`].
    #[must_use]
    pub fn draft_mode(mut self, mode: DraftMode) -> Self {
        self.draft_mode = Some(mode);
        self
    }

    /// Overrides the host used for API requests.
    ///
    /// The base URL is normally derived from the service domain. Set a host
    /// such as `http://localhost:8080` to route requests through a proxy or
    /// a local test server instead; the `/api/v1` path is still appended.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Builds the [`MicrocmsConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `service_domain` or
    /// `api_key` are not set.
    pub fn build(self) -> Result<MicrocmsConfig, ConfigError> {
        let service_domain = self.service_domain.ok_or(ConfigError::MissingRequiredField {
            field: "service_domain",
        })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(MicrocmsConfig {
            service_domain,
            api_key,
            api_key_header_name: self
                .api_key_header_name
                .unwrap_or_else(|| DEFAULT_API_KEY_HEADER.to_string()),
            draft_mode: self.draft_mode.unwrap_or_default(),
            host: self.host,
        })
    }
}
