use crate::error::{LlmError, LlmResult};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the Anthropic API key
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
/// Optional override for the API base URL
pub const BASE_URL_ENV: &str = "ANTHROPIC_BASE_URL";
/// Optional override for the default model
pub const MODEL_ENV: &str = "ANTHROPIC_MODEL";
/// Optional override for the default output token limit
pub const MAX_TOKENS_ENV: &str = "ANTHROPIC_MAX_TOKENS";

/// Load a `.env` file from the current directory or its parents into the
/// process environment.
///
/// A missing file is fine; the variables may already be exported.
///
/// # Errors
///
/// Returns [`LlmError::ConfigurationError`] if a `.env` file exists but
/// can't be read or parsed.
pub fn load_dotenv() -> LlmResult<()> {
    dotenv_outcome(dotenvy::dotenv())
}

pub(crate) fn dotenv_outcome(result: Result<PathBuf, dotenvy::Error>) -> LlmResult<()> {
    match result {
        Ok(path) => {
            log_debug!(path = %path.display(), "Loaded .env file");
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(LlmError::configuration_error(format!(
            "Failed to load .env file: {e}"
        ))),
    }
}

/// Anthropic-specific configuration
///
/// The credential travels inside this value; the adapter never looks at
/// the process environment itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub default_model: String,
    /// Output token limit used when a call doesn't override it
    pub max_tokens: u32,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.anthropic.com".to_string(),
            default_model: "claude-opus-4-6".to_string(),
            max_tokens: 1024,
        }
    }
}

impl AnthropicConfig {
    /// Build a configuration around an explicit API key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Validate the configuration is complete
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigurationError`] if the API key is missing or
    /// blank, or the base URL is empty.
    pub fn validate(&self) -> LlmResult<()> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => {}
            _ => {
                return Err(LlmError::configuration_error(
                    "Anthropic API key is required",
                ));
            }
        }
        if self.base_url.is_empty() {
            return Err(LlmError::configuration_error(
                "Anthropic base URL is required",
            ));
        }
        Ok(())
    }

    /// Load configuration from environment variables. Nothing else in the
    /// crate reads the `ANTHROPIC_*` variables.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigurationError`] if:
    /// - `ANTHROPIC_API_KEY` is unset or blank
    /// - `ANTHROPIC_MAX_TOKENS` is set but isn't a positive integer
    pub fn from_env() -> LlmResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                LlmError::configuration_error(format!(
                    "{API_KEY_ENV} is not set; add it to your environment or .env file"
                ))
            })?;

        let mut config = Self::with_api_key(api_key);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        if let Ok(model) = std::env::var(MODEL_ENV) {
            config.default_model = model;
        }
        if let Ok(raw) = std::env::var(MAX_TOKENS_ENV) {
            config.max_tokens = Self::parse_max_tokens(&raw)?;
        }

        config.validate()?;

        log_debug!(
            provider = "anthropic",
            base_url = %config.base_url,
            model = %config.default_model,
            max_tokens = config.max_tokens,
            "Anthropic configuration loaded from environment"
        );

        Ok(config)
    }

    fn parse_max_tokens(raw: &str) -> LlmResult<u32> {
        match raw.trim().parse::<u32>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(LlmError::configuration_error(format!(
                "{MAX_TOKENS_ENV} must be a positive integer, got '{raw}'"
            ))),
        }
    }
}
