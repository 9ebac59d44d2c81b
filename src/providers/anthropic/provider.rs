//! Anthropic provider implementation

use super::conversion;
use super::types::{AnthropicRequest, AnthropicResponse};
use crate::config::AnthropicConfig;
use crate::core_types::messages::ChatMessage;
use crate::core_types::provider::{ChatModel, RequestConfig, Response};
use crate::error::{LlmError, LlmResult};
use crate::logging::{log_debug, log_error};

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use std::time::Instant;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_RETRY_AFTER_SECONDS: u64 = 60;

/// Anthropic Claude provider implementation
#[derive(Debug)]
pub struct AnthropicProvider {
    client: reqwest::Client,
    config: AnthropicConfig,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider instance
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigurationError`] if the API key is missing or
    /// the configuration is otherwise incomplete.
    pub fn new(config: AnthropicConfig) -> LlmResult<Self> {
        config.validate()?;

        log_debug!(
            provider = "anthropic",
            model = %config.default_model,
            base_url = %config.base_url,
            "Anthropic provider initialized"
        );

        Ok(Self {
            client: reqwest::Client::new(),
            config,
        })
    }

    /// Create a provider from `ANTHROPIC_*` environment variables
    pub fn from_env() -> LlmResult<Self> {
        Self::new(AnthropicConfig::from_env()?)
    }

    pub fn config(&self) -> &AnthropicConfig {
        &self.config
    }

    /// Build the request body for a message list and optional overrides
    pub(super) fn build_request(
        &self,
        messages: &[ChatMessage],
        config: Option<RequestConfig>,
    ) -> AnthropicRequest {
        let (system, conversation) = conversion::transform_messages(messages);
        let config = config.unwrap_or_default();

        AnthropicRequest {
            model: config
                .model
                .unwrap_or_else(|| self.config.default_model.clone()),
            max_tokens: config.max_tokens.unwrap_or(self.config.max_tokens),
            system,
            messages: conversation,
            temperature: config.temperature,
            stop_sequences: config.stop_sequences.filter(|stops| !stops.is_empty()),
        }
    }

    fn build_headers(&self) -> LlmResult<HeaderMap> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| LlmError::configuration_error("Anthropic API key is required"))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(api_key).map_err(|e| {
                LlmError::configuration_error(format!("Invalid API key format: {e}"))
            })?,
        );
        headers.insert(
            "anthropic-version",
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );
        Ok(headers)
    }

    /// Send one request to the Messages API. No retries.
    async fn send_anthropic_request(
        &self,
        request: &AnthropicRequest,
    ) -> LlmResult<AnthropicResponse> {
        let url = format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'));
        let headers = self.build_headers()?;

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log_error!(
                    provider = "anthropic",
                    url = %url,
                    error = %e,
                    "HTTP request failed"
                );
                LlmError::request_failed(
                    format!("Anthropic request failed: {e}"),
                    Some(Box::new(e)),
                )
            })?;

        if !response.status().is_success() {
            return Err(Self::handle_error_response(response).await);
        }

        Self::parse_success_response(response).await
    }

    /// Check if error JSON indicates auth failure
    pub(super) fn is_auth_error(error_json: &serde_json::Value) -> bool {
        error_json
            .get("error")
            .and_then(|obj| obj.get("type"))
            .and_then(|t| t.as_str())
            .map(|error_type| {
                error_type.contains("authentication")
                    || error_type.contains("permission")
                    || error_type.contains("invalid_api_key")
            })
            .unwrap_or(false)
    }

    /// Parse authentication error from response text
    pub(super) fn parse_auth_error(error_text: &str) -> LlmError {
        let detail = serde_json::from_str::<serde_json::Value>(error_text)
            .ok()
            .filter(Self::is_auth_error)
            .and_then(|json| {
                json.pointer("/error/message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            });

        match detail {
            Some(message) => LlmError::authentication_failed(format!(
                "Anthropic rejected the API key: {message}"
            )),
            None => LlmError::authentication_failed("Anthropic authentication failed"),
        }
    }

    /// Extract retry-after value from headers
    pub(super) fn extract_retry_after(headers: &HeaderMap) -> u64 {
        headers
            .get("retry-after")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_RETRY_AFTER_SECONDS)
    }

    /// Handle non-success HTTP responses from Anthropic API
    async fn handle_error_response(response: reqwest::Response) -> LlmError {
        let status = response.status();
        let headers = response.headers().clone();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        log_error!(
            provider = "anthropic",
            status = %status,
            error_text = %error_text,
            "Anthropic API error"
        );

        match status.as_u16() {
            401 | 403 => Self::parse_auth_error(&error_text),
            429 => LlmError::rate_limit_exceeded(Self::extract_retry_after(&headers)),
            _ => LlmError::request_failed(
                format!("Anthropic API error {status}: {error_text}"),
                None,
            ),
        }
    }

    /// Parse successful HTTP response from Anthropic API
    async fn parse_success_response(response: reqwest::Response) -> LlmResult<AnthropicResponse> {
        let raw_body = response.text().await.map_err(|e| {
            LlmError::response_parsing_error(format!("Failed to read response: {e}"))
        })?;

        log_debug!(
            provider = "anthropic",
            response_json = %raw_body,
            "Network response JSON"
        );

        serde_json::from_str(&raw_body).map_err(|e| {
            log_error!(
                provider = "anthropic",
                error = %e,
                raw_body = %raw_body,
                "Failed to parse Anthropic response"
            );
            LlmError::response_parsing_error(format!("Invalid Anthropic response: {e}"))
        })
    }
}

#[async_trait::async_trait]
impl ChatModel for AnthropicProvider {
    async fn invoke(
        &self,
        messages: &[ChatMessage],
        config: Option<RequestConfig>,
    ) -> LlmResult<Response> {
        let request = self.build_request(messages, config);

        log_debug!(
            provider = "anthropic",
            request_json = %serde_json::to_string(&request).unwrap_or_default(),
            "Network request JSON"
        );

        let start_time = Instant::now();
        let api_response = self.send_anthropic_request(&request).await?;

        log_debug!(
            provider = "anthropic",
            model = %api_response.model,
            input_tokens = api_response.usage.input_tokens,
            output_tokens = api_response.usage.output_tokens,
            duration_ms = start_time.elapsed().as_millis() as u64,
            "Anthropic response received"
        );

        Ok(conversion::convert_response(api_response))
    }

    fn llm_type(&self) -> &'static str {
        "anthropic"
    }
}
