//! Tests for the auth module

use super::*;
use crate::config::{ConnectionConfig, ACCESS_TOKEN_ENV};
use crate::error::Error;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_with_token(key: &str) -> Option<String> {
    (key == ACCESS_TOKEN_ENV).then(|| "api-from-env".to_string())
}

fn env_with_empty_token(_: &str) -> Option<String> {
    Some(String::new())
}

#[test]
fn test_configured_token_wins() {
    let config = ConnectionConfig::with_token("api-configured");
    let token = resolve_access_token(&config, env_with_token).unwrap();
    assert_eq!(token, "api-configured");
}

#[test]
fn test_env_fallback() {
    let config = ConnectionConfig::default();
    let token = resolve_access_token(&config, env_with_token).unwrap();
    assert_eq!(token, "api-from-env");
}

#[test]
fn test_empty_configured_token_falls_back_to_env() {
    let config = ConnectionConfig::with_token("");
    let token = resolve_access_token(&config, env_with_token).unwrap();
    assert_eq!(token, "api-from-env");
}

#[test]
fn test_missing_token_is_config_error() {
    let config = ConnectionConfig::default();
    let err = resolve_access_token(&config, no_env).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("access_token must be configured"));

    let err = resolve_access_token(&config, env_with_empty_token).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn test_access_token_header() {
    let auth = Authenticator::new(AuthConfig::access_token("api-123"));
    let client = reqwest::Client::new();
    let built = auth
        .apply(client.get("https://example.com/api"))
        .build()
        .unwrap();
    assert_eq!(built.headers().get("Authorization").unwrap(), "api-123");
}

#[test]
fn test_prefixed_token_header() {
    let auth = Authenticator::new(AuthConfig::prefixed("Bearer ", "api-123"));
    let client = reqwest::Client::new();
    let built = auth
        .apply(client.get("https://example.com/api"))
        .build()
        .unwrap();
    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Bearer api-123"
    );
}

#[test]
fn test_debug_redacts_secrets() {
    let debug = format!("{:?}", AuthConfig::prefixed("Bearer ", "api-very-secret"));
    assert!(!debug.contains("api-very-secret"));
    assert!(debug.contains("Bearer "));

    let debug = format!("{:?}", Authenticator::new(AuthConfig::access_token("api-other")));
    assert!(!debug.contains("api-other"));
}
