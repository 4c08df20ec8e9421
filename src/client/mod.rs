//! Client types for microCMS content API communication.
//!
//! This module provides the request-construction and dispatch layer for the
//! microCMS content API. Requests are built deterministically from typed
//! inputs, executed as a single exchange, and interpreted into an untyped
//! JSON tree.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`MicrocmsClient`]: The async client for API communication
//! - [`GetParameter`]: Typed query parameters for content reads
//! - [`Method`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`RequestSpec`]: A fully resolved request, inspectable before dispatch
//! - [`ApiError`]: The error type for all API operations
//!
//! # Example
//!
//! ```rust,ignore
//! use microcms_client::{ApiKey, GetParameter, MicrocmsClient, MicrocmsConfig, ServiceDomain};
//!
//! let config = MicrocmsConfig::builder()
//!     .service_domain(ServiceDomain::new("my-service")?)
//!     .api_key(ApiKey::new("my-api-key")?)
//!     .build()?;
//! let client = MicrocmsClient::new(config);
//!
//! // Read a list with filtering and sorting
//! let params = [
//!     GetParameter::Filters("createdAt[greater_than]2019-11".into()),
//!     GetParameter::Orders(vec!["-publishedAt".into()]),
//! ];
//! let list = client.get("blogs", None, Some(&params)).await?;
//!
//! // Create, update, delete
//! let body = serde_json::json!({"title": "Hello"});
//! client.create("blogs", Some(&body), false).await?;
//! client.update("blogs", Some("blog-id"), Some(&body)).await?;
//! client.delete("blogs", "blog-id").await?;
//! ```
//!
//! # Response Interpretation
//!
//! Non-DELETE responses are parsed as JSON into a [`serde_json::Value`];
//! content schemas are collection-specific, so no typed model is imposed.
//! DELETE responses are never parsed: success resolves to the fixed sentinel
//! `"success"`. A completed exchange with no body is an explicit
//! [`ApiError::EmptyBody`], never a silent drop.

mod api_client;
mod errors;
mod params;
mod request;

pub use api_client::{MicrocmsClient, API_VERSION, SDK_VERSION};
pub use errors::ApiError;
pub use params::GetParameter;
pub use request::{Method, RequestSpec};
