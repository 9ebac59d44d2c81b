//! Joke-telling application code
//!
//! Depends only on [`ChatModel`]. Which provider answers is decided by
//! whoever calls [`get_joke`].

use crate::core_types::messages::ChatMessage;
use crate::core_types::provider::ChatModel;
use crate::error::LlmResult;
use crate::logging::{log_debug, log_info};
use crate::providers::AnthropicProvider;

pub const JOKE_SYSTEM_PROMPT: &str =
    "You are a witty comedian who specialises in short, clever jokes.";
pub const JOKE_USER_PROMPT: &str = "Tell me one short, funny joke.";

/// The fixed conversation sent for every joke
pub fn joke_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(JOKE_SYSTEM_PROMPT),
        ChatMessage::user(JOKE_USER_PROMPT),
    ]
}

/// Ask `llm` for a joke and return its text unchanged
pub async fn tell_joke(llm: &dyn ChatModel) -> LlmResult<String> {
    log_debug!(llm_type = llm.llm_type(), "Requesting joke");
    let response = llm.invoke(&joke_messages(), None).await?;
    Ok(response.content)
}

/// Ask for a joke, using `llm` if given and the Anthropic adapter otherwise.
///
/// # Errors
///
/// With no model supplied, fails with
/// [`LlmError::ConfigurationError`](crate::LlmError::ConfigurationError)
/// when `ANTHROPIC_API_KEY` isn't set. Any error from the model itself is
/// returned as is.
pub async fn get_joke(llm: Option<&dyn ChatModel>) -> LlmResult<String> {
    match llm {
        Some(llm) => tell_joke(llm).await,
        None => {
            log_info!("No chat model supplied, using Anthropic from environment");
            let provider = AnthropicProvider::from_env()?;
            tell_joke(&provider).await
        }
    }
}
