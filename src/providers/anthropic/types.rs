//! Anthropic API request and response type definitions

use serde::{Deserialize, Serialize};

/// Anthropic Messages API request structure
#[derive(Debug, Serialize, Clone, PartialEq)]
pub(super) struct AnthropicRequest {
    pub model: String,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    pub messages: Vec<AnthropicMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
}

/// Anthropic message structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub(super) struct AnthropicMessage {
    pub role: String,
    pub content: String,
}

/// Content block in a response. Only text is extracted; anything else the
/// API adds later is tolerated and skipped.
#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "type")]
pub(super) enum AnthropicContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Other,
}

/// Anthropic API response structure
#[derive(Debug, Deserialize, Clone)]
pub(super) struct AnthropicResponse {
    pub content: Vec<AnthropicContentBlock>,
    pub model: String,
    #[serde(default)]
    pub stop_reason: Option<String>,
    pub usage: AnthropicUsage,
}

#[derive(Debug, Deserialize, Clone)]
pub(super) struct AnthropicUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}
