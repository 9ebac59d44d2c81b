//! Message conversion between chat messages and Anthropic API format

use super::types::{AnthropicContentBlock, AnthropicMessage, AnthropicResponse};
use crate::core_types::messages::{ChatMessage, MessageRole};
use crate::core_types::provider::{Response, TokenUsage};
use crate::logging::log_debug;

/// Split messages into the top-level system prompt and the conversation.
///
/// Anthropic keeps the system prompt outside the message list. Blank system
/// messages are dropped and the rest are joined with a blank line.
pub(super) fn transform_messages(
    messages: &[ChatMessage],
) -> (Option<String>, Vec<AnthropicMessage>) {
    let mut system_parts: Vec<&str> = Vec::new();
    let mut conversation: Vec<AnthropicMessage> = Vec::new();

    for msg in messages {
        match msg.role {
            MessageRole::System => {
                if !msg.content.trim().is_empty() {
                    system_parts.push(&msg.content);
                }
            }
            MessageRole::User => add_turn(&mut conversation, "user", &msg.content),
            MessageRole::Assistant => add_turn(&mut conversation, "assistant", &msg.content),
        }
    }

    let system = if system_parts.is_empty() {
        None
    } else {
        Some(system_parts.join("\n\n"))
    };

    (system, conversation)
}

fn add_turn(conversation: &mut Vec<AnthropicMessage>, role: &str, content: &str) {
    combine_or_add_message(
        conversation,
        AnthropicMessage {
            role: role.to_string(),
            content: content.to_string(),
        },
    );
}

/// The API rejects consecutive turns from the same role, so fold them.
fn combine_or_add_message(combined: &mut Vec<AnthropicMessage>, msg: AnthropicMessage) {
    match combined.last_mut() {
        Some(last) if last.role == msg.role => {
            log_debug!(
                provider = "anthropic",
                role = %msg.role,
                "Combining consecutive messages with same role"
            );
            last.content.push('\n');
            last.content.push_str(&msg.content);
        }
        _ => combined.push(msg),
    }
}

/// Convert an API response into the provider-agnostic [`Response`]
pub(super) fn convert_response(api_response: AnthropicResponse) -> Response {
    let content = api_response
        .content
        .iter()
        .filter_map(|block| match block {
            AnthropicContentBlock::Text { text } => Some(text.as_str()),
            AnthropicContentBlock::Other => None,
        })
        .collect::<Vec<_>>()
        .join("\n");

    let usage = TokenUsage {
        prompt_tokens: api_response.usage.input_tokens,
        completion_tokens: api_response.usage.output_tokens,
        total_tokens: api_response
            .usage
            .input_tokens
            .saturating_add(api_response.usage.output_tokens),
    };

    Response {
        content,
        usage: Some(usage),
        model: Some(api_response.model),
        stop_reason: api_response.stop_reason,
    }
}
