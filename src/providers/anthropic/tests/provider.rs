//! Unit Tests for Anthropic Provider Pure Functions
//!
//! UNIT UNDER TEST: AnthropicProvider construction, request building and
//! error parsing helpers
//!
//! BUSINESS RESPONSIBILITY:
//!   - Refuse to build without a credential
//!   - Apply per-call overrides on top of configured defaults
//!   - Recognize authentication errors and Retry-After hints
//!
//! TEST COVERAGE:
//!   - Construction with valid, missing and blank API keys
//!   - Default vs overridden model / max_tokens / temperature / stop sequences
//!   - Request serialization shape
//!   - Auth error detection and Retry-After parsing

use super::super::provider::AnthropicProvider;
use crate::config::AnthropicConfig;
use crate::core_types::messages::ChatMessage;
use crate::core_types::provider::{ChatModel, RequestConfig};
use crate::error::LlmError;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::json;

fn create_test_provider() -> AnthropicProvider {
    let config = AnthropicConfig {
        api_key: Some("test-api-key".to_string()),
        base_url: "https://api.anthropic.com".to_string(),
        default_model: "claude-test-model".to_string(),
        max_tokens: 256,
    };
    AnthropicProvider::new(config).expect("Failed to create test provider")
}

// ============================================================================
// Provider Construction Tests
// ============================================================================

#[test]
fn test_new_with_valid_config() {
    let provider = create_test_provider();

    assert_eq!(provider.llm_type(), "anthropic");
    assert_eq!(provider.config().default_model, "claude-test-model");
}

#[test]
fn test_new_fails_without_api_key() {
    let result = AnthropicProvider::new(AnthropicConfig::default());

    match result {
        Err(LlmError::ConfigurationError { message }) => {
            assert!(message.contains("API key"), "Error should mention API key");
        }
        other => panic!("Expected ConfigurationError, got: {:?}", other),
    }
}

#[test]
fn test_new_fails_with_blank_api_key() {
    let result = AnthropicProvider::new(AnthropicConfig::with_api_key("  "));

    assert!(matches!(result, Err(LlmError::ConfigurationError { .. })));
}

// ============================================================================
// Request Building Tests
// ============================================================================

#[test]
fn test_build_request_uses_configured_defaults() {
    // Arrange
    let provider = create_test_provider();
    let messages = vec![ChatMessage::system("Be brief."), ChatMessage::user("Hi")];

    // Act
    let request = provider.build_request(&messages, None);

    // Assert
    assert_eq!(request.model, "claude-test-model");
    assert_eq!(request.max_tokens, 256);
    assert_eq!(request.system.as_deref(), Some("Be brief."));
    assert!(request.temperature.is_none());
    assert!(request.stop_sequences.is_none());
}

#[test]
fn test_build_request_applies_overrides() {
    let provider = create_test_provider();
    let config = RequestConfig {
        model: Some("claude-other".to_string()),
        max_tokens: Some(64),
        temperature: Some(0.2),
        stop_sequences: Some(vec!["\n\n".to_string()]),
    };

    let request = provider.build_request(&[ChatMessage::user("Hi")], Some(config));

    assert_eq!(request.model, "claude-other");
    assert_eq!(request.max_tokens, 64);
    assert_eq!(request.temperature, Some(0.2));
    assert_eq!(request.stop_sequences, Some(vec!["\n\n".to_string()]));
}

#[test]
fn test_build_request_drops_empty_stop_sequence_list() {
    let provider = create_test_provider();
    let config = RequestConfig {
        stop_sequences: Some(vec![]),
        ..Default::default()
    };

    let request = provider.build_request(&[ChatMessage::user("Hi")], Some(config));

    assert!(request.stop_sequences.is_none());
}

#[test]
fn test_request_serialization_omits_unset_fields() {
    let provider = create_test_provider();

    let request = provider.build_request(&[ChatMessage::user("Hi")], None);
    let body = serde_json::to_value(&request).expect("request serializes");

    assert_eq!(
        body,
        json!({
            "model": "claude-test-model",
            "max_tokens": 256,
            "messages": [{"role": "user", "content": "Hi"}]
        })
    );
}

// ============================================================================
// Error Parsing Tests
// ============================================================================

#[test]
fn test_is_auth_error_with_authentication_type() {
    let error_json = json!({
        "type": "error",
        "error": {"type": "authentication_error", "message": "invalid x-api-key"}
    });

    assert!(AnthropicProvider::is_auth_error(&error_json));
}

#[test]
fn test_is_auth_error_with_rate_limit_error() {
    let error_json = json!({"error": {"type": "rate_limit_error"}});

    assert!(!AnthropicProvider::is_auth_error(&error_json));
}

#[test]
fn test_is_auth_error_with_missing_error_field() {
    assert!(!AnthropicProvider::is_auth_error(&json!({"message": "nope"})));
}

#[test]
fn test_parse_auth_error_includes_provider_message() {
    let body = r#"{"type":"error","error":{"type":"authentication_error","message":"invalid x-api-key"}}"#;

    match AnthropicProvider::parse_auth_error(body) {
        LlmError::AuthenticationFailed { message } => {
            assert!(message.contains("invalid x-api-key"));
        }
        other => panic!("Expected AuthenticationFailed, got: {:?}", other),
    }
}

#[test]
fn test_parse_auth_error_with_invalid_json() {
    let err = AnthropicProvider::parse_auth_error("<html>Unauthorized</html>");

    assert!(matches!(err, LlmError::AuthenticationFailed { .. }));
}

#[test]
fn test_extract_retry_after_reads_header() {
    let mut headers = HeaderMap::new();
    headers.insert("retry-after", HeaderValue::from_static("17"));

    assert_eq!(AnthropicProvider::extract_retry_after(&headers), 17);
}

#[test]
fn test_extract_retry_after_defaults_when_missing_or_invalid() {
    let mut headers = HeaderMap::new();
    assert_eq!(AnthropicProvider::extract_retry_after(&headers), 60);

    headers.insert("retry-after", HeaderValue::from_static("soon"));
    assert_eq!(AnthropicProvider::extract_retry_after(&headers), 60);
}
