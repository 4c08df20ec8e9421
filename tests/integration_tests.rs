//! Crate-level integration tests.
//!
//! These tests verify the public surface: type exports, multi-tenant client
//! construction, and error short-circuiting without a network.

use microcms_client::{
    ApiError, ApiKey, ConfigError, MicrocmsClient, MicrocmsConfig, ServiceDomain,
};

/// Creates a client for the given service with the default configuration.
fn create_test_client(service: &str, api_key: &str) -> MicrocmsClient {
    let config = MicrocmsConfig::builder()
        .service_domain(ServiceDomain::new(service).unwrap())
        .api_key(ApiKey::new(api_key).unwrap())
        .build()
        .unwrap();
    MicrocmsClient::new(config)
}

// ============================================================================
// Multi-tenant Tests
// ============================================================================

#[test]
fn test_multiple_clients_for_different_services() {
    let client_one = create_test_client("service-one", "key-1");
    let client_two = create_test_client("service-two", "key-2");

    assert_eq!(client_one.base_url(), "https://service-one.microcms.io/api/v1");
    assert_eq!(client_two.base_url(), "https://service-two.microcms.io/api/v1");
    assert_eq!(client_one.config().api_key().as_ref(), "key-1");
    assert_eq!(client_two.config().api_key().as_ref(), "key-2");
}

#[test]
fn test_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MicrocmsClient>();
    assert_send_sync::<MicrocmsConfig>();
}

// ============================================================================
// Error Short-circuit Tests
// ============================================================================

#[tokio::test]
async fn test_invalid_endpoint_fails_before_any_network_call() {
    let client = create_test_client("test-service", "key");

    // Control characters cannot form a URL; no exchange is attempted, so
    // this resolves immediately even though the domain is unreachable.
    let result = client.get("end\u{0}point", None, None).await;

    assert!(matches!(result, Err(ApiError::Encoding { .. })));
}

#[test]
fn test_config_validation_errors_are_typed() {
    assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
    assert!(matches!(
        ServiceDomain::new("bad domain"),
        Err(ConfigError::InvalidServiceDomain { .. })
    ));
}

// ============================================================================
// Type Export Tests
// ============================================================================

#[test]
fn test_types_exported_at_crate_root() {
    let _: fn(microcms_client::MicrocmsClient) = |_| {};
    let _: fn(microcms_client::GetParameter) = |_| {};
    let _: fn(microcms_client::Method) = |_| {};
    let _: fn(microcms_client::RequestSpec) = |_| {};
    let _: fn(microcms_client::ApiError) = |_| {};
    let _: fn(microcms_client::DraftMode) = |_| {};
}

#[test]
fn test_types_exported_from_client_module() {
    let _: fn(microcms_client::client::MicrocmsClient) = |_| {};
    let _: fn(microcms_client::client::ApiError) = |_| {};
}

#[test]
fn test_header_constants_exported() {
    assert_eq!(microcms_client::DEFAULT_API_KEY_HEADER, "X-MICROCMS-API-KEY");
    assert_eq!(
        microcms_client::GLOBAL_DRAFT_KEY_HEADER,
        "X-MICROCMS-GLOBAL-DRAFT-KEY"
    );
}
