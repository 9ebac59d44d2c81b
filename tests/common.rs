//! Test helper utilities for quip integration tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use quip::{AnthropicConfig, AnthropicProvider};
use wiremock::ResponseTemplate;

pub const TEST_API_KEY: &str = "test-key";
pub const TEST_MODEL: &str = "claude-test-model";

/// Configuration pointing at a mock server
pub fn create_test_config(base_url: String) -> AnthropicConfig {
    AnthropicConfig {
        api_key: Some(TEST_API_KEY.to_string()),
        base_url,
        default_model: TEST_MODEL.to_string(),
        max_tokens: 128,
    }
}

/// Provider pointing at a mock server
pub fn create_test_provider(base_url: String) -> AnthropicProvider {
    AnthropicProvider::new(create_test_config(base_url)).expect("test provider should build")
}

/// A Messages API success body with a single text block
pub fn create_success_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "msg_123",
        "type": "message",
        "role": "assistant",
        "content": [{
            "type": "text",
            "text": text
        }],
        "model": TEST_MODEL,
        "stop_reason": "end_turn",
        "stop_sequence": null,
        "usage": {
            "input_tokens": 10,
            "output_tokens": 5
        }
    })
}

pub fn create_success_response(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(create_success_body(text))
}

pub fn create_error_response(status: u16, error_type: &str, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(serde_json::json!({
        "type": "error",
        "error": {
            "type": error_type,
            "message": message
        }
    }))
}
