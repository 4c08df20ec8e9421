//! # microCMS Rust SDK
//!
//! A Rust SDK for the [microCMS](https://microcms.io) content API, providing
//! type-safe configuration, deterministic request construction, and an async
//! client for reading and writing content.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`MicrocmsConfig`] and [`MicrocmsConfigBuilder`]
//! - Validated newtypes for the API key and service domain
//! - Typed query parameters for filtering, sorting, and pagination
//! - Async content operations: `get`, `create`, `create_with_id`, `update`, `delete`
//! - Inspectable request specs for every operation
//!
//! ## Quick Start
//!
//! ```rust
//! use microcms_client::{ApiKey, MicrocmsClient, MicrocmsConfig, ServiceDomain};
//!
//! let config = MicrocmsConfig::builder()
//!     .service_domain(ServiceDomain::new("my-service").unwrap())
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = MicrocmsClient::new(config);
//! assert_eq!(client.base_url(), "https://my-service.microcms.io/api/v1");
//! ```
//!
//! ## Reading Content
//!
//! ```rust,ignore
//! use microcms_client::GetParameter;
//!
//! // List contents with parameters
//! let params = [
//!     GetParameter::Fields(vec!["id".into(), "title".into()]),
//!     GetParameter::Limit(5),
//!     GetParameter::Orders(vec!["-publishedAt".into()]),
//! ];
//! let list = client.get("blogs", None, Some(&params)).await?;
//!
//! // A single content by id
//! let item = client.get("blogs", Some("blog-id"), None).await?;
//! ```
//!
//! ## Writing Content
//!
//! ```rust,ignore
//! let body = serde_json::json!({"title": "Hello", "body": "World"});
//!
//! // Create with a server-generated id; `true` saves it as a draft
//! let created = client.create("blogs", Some(&body), false).await?;
//!
//! // Create with a caller-chosen id
//! let created = client.create_with_id("blogs", "my-id", Some(&body), false).await?;
//!
//! // Partial update
//! let patch = serde_json::json!({"title": "Hello again"});
//! client.update("blogs", Some("my-id"), Some(&patch)).await?;
//!
//! // Delete; resolves to the sentinel "success"
//! let result = client.delete("blogs", "my-id").await?;
//! assert_eq!(result, serde_json::json!("success"));
//! ```
//!
//! ## Draft Content
//!
//! Two mechanisms exist for requesting unpublished content; configure exactly
//! one via [`DraftMode`]:
//!
//! ```rust
//! use microcms_client::{ApiKey, DraftKey, DraftMode, MicrocmsConfig, ServiceDomain};
//!
//! // Default: per-call draft flags on writes add `status=draft`
//! let config = MicrocmsConfig::builder()
//!     .service_domain(ServiceDomain::new("my-service").unwrap())
//!     .api_key(ApiKey::new("key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! // Legacy: a global draft key sent as a header on every read
//! let config = MicrocmsConfig::builder()
//!     .service_domain(ServiceDomain::new("my-service").unwrap())
//!     .api_key(ApiKey::new("key").unwrap())
//!     .draft_mode(DraftMode::GlobalKey(DraftKey::new("draft-key").unwrap()))
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Single exchange per call**: No retries, caching, or pagination helpers;
//!   transport policy belongs to the embedding application

pub mod client;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use client::{
    ApiError, GetParameter, Method, MicrocmsClient, RequestSpec, API_VERSION, SDK_VERSION,
};
pub use config::{
    ApiKey, DraftKey, DraftMode, MicrocmsConfig, MicrocmsConfigBuilder, ServiceDomain,
    DEFAULT_API_KEY_HEADER, GLOBAL_DRAFT_KEY_HEADER,
};
pub use error::ConfigError;
