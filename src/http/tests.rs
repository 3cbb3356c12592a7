//! Tests for the HTTP client module

use super::*;
use std::time::Duration;

#[test]
fn test_config_defaults() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert!(config.user_agent.starts_with("pap-extractor/"));
}

#[test]
fn test_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com")
        .timeout(Duration::from_secs(5))
        .header("Accept", "application/json")
        .user_agent("custom/1.0")
        .build();

    assert_eq!(config.base_url.as_deref(), Some("https://api.example.com"));
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(
        config.default_headers.get("Accept").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(config.user_agent, "custom/1.0");
}

#[test]
fn test_build_url_joins_base_and_path() {
    let client = HttpClient::with_config(
        HttpClientConfig::builder()
            .base_url("https://api.example.com/")
            .build(),
    );
    assert_eq!(
        client.build_url("/scripts/server.php"),
        "https://api.example.com/scripts/server.php"
    );
}

#[test]
fn test_build_url_empty_path_returns_base() {
    let client = HttpClient::with_config(
        HttpClientConfig::builder()
            .base_url("https://api.example.com/scripts/server.php")
            .build(),
    );
    assert_eq!(
        client.build_url(""),
        "https://api.example.com/scripts/server.php"
    );
}

#[test]
fn test_build_url_absolute_passthrough() {
    let client = HttpClient::new();
    assert_eq!(
        client.build_url("https://other.example.com/x"),
        "https://other.example.com/x"
    );
}
