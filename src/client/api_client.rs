//! Client for microCMS content API communication.
//!
//! This module provides the [`MicrocmsClient`] type for building and
//! dispatching authenticated requests to the microCMS content API.

use std::collections::HashMap;

use crate::client::errors::ApiError;
use crate::client::params::GetParameter;
use crate::client::request::{Method, RequestSpec};
use crate::config::{DraftMode, MicrocmsConfig, GLOBAL_DRAFT_KEY_HEADER};

/// Content API version segment of the base URL.
pub const API_VERSION: &str = "v1";

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Client for the microCMS content API.
///
/// The client handles:
/// - Base URL construction from the service domain
/// - API-key header injection on every request
/// - Query-parameter encoding for reads
/// - JSON body serialization for writes
/// - Response interpretation (JSON tree, or a fixed sentinel for DELETE)
///
/// Each operation is a single request/response exchange: no retries, no
/// shared state between calls. The configuration is immutable, so one client
/// can serve any number of concurrent calls.
///
/// # Cancellation
///
/// The future returned by each operation is the cancellation handle: dropping
/// it aborts the in-flight exchange and no completion is observed. Dropping
/// after completion is a no-op.
///
/// # Thread Safety
///
/// `MicrocmsClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use microcms_client::{ApiKey, GetParameter, MicrocmsClient, MicrocmsConfig, ServiceDomain};
///
/// let config = MicrocmsConfig::builder()
///     .service_domain(ServiceDomain::new("my-service")?)
///     .api_key(ApiKey::new("my-api-key")?)
///     .build()?;
/// let client = MicrocmsClient::new(config);
///
/// let params = [GetParameter::Limit(5), GetParameter::Orders(vec!["-publishedAt".into()])];
/// let list = client.get("blogs", None, Some(&params)).await?;
/// ```
#[derive(Debug)]
pub struct MicrocmsClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Immutable SDK configuration.
    config: MicrocmsConfig,
    /// Base URL (e.g., `https://my-service.microcms.io/api/v1`).
    base_url: String,
}

// Verify MicrocmsClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MicrocmsClient>();
};

impl MicrocmsClient {
    /// Creates a new client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use microcms_client::{ApiKey, MicrocmsClient, MicrocmsConfig, ServiceDomain};
    ///
    /// let config = MicrocmsConfig::builder()
    ///     .service_domain(ServiceDomain::new("my-service").unwrap())
    ///     .api_key(ApiKey::new("my-api-key").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = MicrocmsClient::new(config);
    /// assert_eq!(client.base_url(), "https://my-service.microcms.io/api/v1");
    /// ```
    #[must_use]
    pub fn new(config: MicrocmsConfig) -> Self {
        // The host override routes requests through a proxy or test server.
        let base_url = config.host().map_or_else(
            || {
                format!(
                    "https://{}/api/{API_VERSION}",
                    config.service_domain().as_ref()
                )
            },
            |host| format!("{}/api/{API_VERSION}", host.trim_end_matches('/')),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config,
            base_url,
        }
    }

    /// Returns the base URL for this client, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &MicrocmsConfig {
        &self.config
    }

    /// Builds a read request without dispatching it.
    ///
    /// The endpoint and optional content id are joined to the base URL with
    /// exactly one `/` each; parameters are encoded as query items in input
    /// order, duplicates preserved. The API-key header is always attached; a
    /// global draft-key header is attached when the client is configured with
    /// [`DraftMode::GlobalKey`].
    ///
    /// An empty `content_id` is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encoding`] if the endpoint or content id cannot
    /// form a valid URL.
    pub fn make_get_request(
        &self,
        endpoint: &str,
        content_id: Option<&str>,
        params: Option<&[GetParameter]>,
    ) -> Result<RequestSpec, ApiError> {
        let mut url = self.parse_content_url(endpoint, content_id)?;

        if let Some(params) = params.filter(|p| !p.is_empty()) {
            let mut pairs = url.query_pairs_mut();
            for param in params {
                let (key, value) = param.as_query_pair();
                pairs.append_pair(key, &value);
            }
        }

        let mut headers = self.default_headers();
        if let DraftMode::GlobalKey(draft_key) = self.config.draft_mode() {
            headers.insert(
                GLOBAL_DRAFT_KEY_HEADER.to_string(),
                draft_key.as_ref().to_string(),
            );
        }

        Ok(RequestSpec {
            method: Method::Get,
            url,
            headers,
            body: None,
        })
    }

    /// Builds a write request without dispatching it.
    ///
    /// Path assembly is identical to [`make_get_request`](Self::make_get_request).
    /// A draft flag of `Some(true)` adds a `status=draft` query item. The body
    /// is serialized to a JSON document; `None` yields no payload. The API-key
    /// header and `Content-Type: application/json` are attached
    /// unconditionally, body or not.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encoding`] if the endpoint or content id cannot
    /// form a valid URL, and [`ApiError::Serialization`] if the body cannot be
    /// represented as JSON.
    pub fn make_write_request(
        &self,
        method: Method,
        endpoint: &str,
        content_id: Option<&str>,
        body: Option<&serde_json::Value>,
        is_draft: Option<bool>,
    ) -> Result<RequestSpec, ApiError> {
        let mut url = self.parse_content_url(endpoint, content_id)?;

        if is_draft == Some(true) {
            url.query_pairs_mut().append_pair("status", "draft");
        }

        let body = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(ApiError::Serialization)?;

        let mut headers = self.default_headers();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Ok(RequestSpec {
            method,
            url,
            headers,
            body,
        })
    }

    /// Fetches content from an endpoint.
    ///
    /// Pass a `content_id` to fetch a single element of a list endpoint;
    /// leave it `None` to fetch the list (or an object endpoint).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encoding`] before any network call if the URL
    /// cannot be built, [`ApiError::Network`] for transport failures,
    /// [`ApiError::EmptyBody`] if the response carried no body, and
    /// [`ApiError::Parse`] if the body was not valid JSON.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// // List contents
    /// let list = client.get("blogs", None, None).await?;
    ///
    /// // A single content, selected fields only
    /// let params = [GetParameter::Fields(vec!["title".into()])];
    /// let item = client.get("blogs", Some("blog-id"), Some(&params)).await?;
    /// ```
    pub async fn get(
        &self,
        endpoint: &str,
        content_id: Option<&str>,
        params: Option<&[GetParameter]>,
    ) -> Result<serde_json::Value, ApiError> {
        let spec = self.make_get_request(endpoint, content_id, params)?;
        self.execute(spec).await
    }

    /// Creates content with a server-generated id (POST).
    ///
    /// Set `is_draft` to save the content as a draft instead of publishing.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encoding`], [`ApiError::Serialization`],
    /// [`ApiError::Network`], [`ApiError::EmptyBody`], or [`ApiError::Parse`]
    /// as described on [`get`](Self::get).
    pub async fn create(
        &self,
        endpoint: &str,
        body: Option<&serde_json::Value>,
        is_draft: bool,
    ) -> Result<serde_json::Value, ApiError> {
        let spec =
            self.make_write_request(Method::Post, endpoint, None, body, Some(is_draft))?;
        self.execute(spec).await
    }

    /// Creates content with a caller-chosen id (PUT).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encoding`], [`ApiError::Serialization`],
    /// [`ApiError::Network`], [`ApiError::EmptyBody`], or [`ApiError::Parse`]
    /// as described on [`get`](Self::get).
    pub async fn create_with_id(
        &self,
        endpoint: &str,
        content_id: &str,
        body: Option<&serde_json::Value>,
        is_draft: bool,
    ) -> Result<serde_json::Value, ApiError> {
        let spec = self.make_write_request(
            Method::Put,
            endpoint,
            Some(content_id),
            body,
            Some(is_draft),
        )?;
        self.execute(spec).await
    }

    /// Partially updates content (PATCH).
    ///
    /// Pass `None` as `content_id` to update an object-form endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encoding`], [`ApiError::Serialization`],
    /// [`ApiError::Network`], [`ApiError::EmptyBody`], or [`ApiError::Parse`]
    /// as described on [`get`](Self::get).
    pub async fn update(
        &self,
        endpoint: &str,
        content_id: Option<&str>,
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value, ApiError> {
        let spec = self.make_write_request(Method::Patch, endpoint, content_id, body, None)?;
        self.execute(spec).await
    }

    /// Deletes content (DELETE).
    ///
    /// On success this resolves to the fixed sentinel `"success"`; the
    /// response body is not parsed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encoding`] or [`ApiError::Network`] as described
    /// on [`get`](Self::get).
    pub async fn delete(
        &self,
        endpoint: &str,
        content_id: &str,
    ) -> Result<serde_json::Value, ApiError> {
        let spec =
            self.make_write_request(Method::Delete, endpoint, Some(content_id), None, None)?;
        self.execute(spec).await
    }

    /// Dispatches a resolved request and interprets the response.
    async fn execute(&self, spec: RequestSpec) -> Result<serde_json::Value, ApiError> {
        tracing::debug!(method = %spec.method, url = %spec.url, "dispatching request");

        let method = spec.method;
        let mut builder = self.client.request(method.into(), spec.url);
        for (key, value) in &spec.headers {
            builder = builder.header(key, value);
        }
        if let Some(body) = spec.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        tracing::debug!(status = status.as_u16(), bytes = bytes.len(), "received response");

        // DELETE carries no meaningful body; report the fixed sentinel.
        if method == Method::Delete {
            return Ok(serde_json::Value::String("success".to_string()));
        }

        if bytes.is_empty() {
            return Err(ApiError::EmptyBody);
        }

        serde_json::from_slice(&bytes).map_err(ApiError::Parse)
    }

    fn parse_content_url(
        &self,
        endpoint: &str,
        content_id: Option<&str>,
    ) -> Result<reqwest::Url, ApiError> {
        let mut url_string = format!("{}/{endpoint}", self.base_url);
        if let Some(content_id) = content_id.filter(|id| !id.is_empty()) {
            url_string.push('/');
            url_string.push_str(content_id);
        }

        // The url parser silently percent-encodes most path garbage, so an
        // empty endpoint or control characters must be rejected here.
        if endpoint.is_empty() || url_string.chars().any(char::is_control) {
            return Err(ApiError::Encoding { url: url_string });
        }

        reqwest::Url::parse(&url_string).map_err(|_| ApiError::Encoding { url: url_string })
    }

    fn default_headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert(
            self.config.api_key_header_name().to_string(),
            self.config.api_key().as_ref().to_string(),
        );
        headers
    }
}
