//! The chat model trait and its request/response types
//!
//! Application code depends on [`ChatModel`] only. Production code hands it
//! an adapter such as [`AnthropicProvider`](crate::AnthropicProvider); tests
//! hand it a mock.

use crate::core_types::messages::ChatMessage;
use crate::error::LlmResult;
use serde::{Deserialize, Serialize};

/// Optional per-call settings
///
/// Anything left as `None` falls back to the adapter's configured default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RequestConfig {
    /// Model name override
    pub model: Option<String>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Temperature setting for response randomness (0.0 to 1.0)
    pub temperature: Option<f64>,
    /// Sequences that stop generation when produced
    pub stop_sequences: Option<Vec<String>>,
}

/// Token usage information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used (prompt + completion)
    pub total_tokens: u32,
}

/// Response from a single chat model invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Generated text
    pub content: String,
    /// Token usage information
    pub usage: Option<TokenUsage>,
    /// Model that generated the response
    pub model: Option<String>,
    /// Why generation stopped, as reported by the provider
    pub stop_reason: Option<String>,
}

impl Response {
    /// A response carrying only text and no metadata
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            usage: None,
            model: None,
            stop_reason: None,
        }
    }
}

/// Anything that can turn an ordered list of messages into a response.
///
/// Implementations must not keep mutable state between calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ChatModel: Send + Sync {
    /// Send `messages` in order and return the generated response
    async fn invoke(
        &self,
        messages: &[ChatMessage],
        config: Option<RequestConfig>,
    ) -> LlmResult<Response>;

    /// Short identifier used in logs
    fn llm_type(&self) -> &'static str;
}
