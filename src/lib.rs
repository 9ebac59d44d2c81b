//! # quip
//!
//! A provider-agnostic chat model interface, one Anthropic adapter behind
//! it, and a tiny application that asks for a joke.
//!
//! Application code talks to [`ChatModel`] only, so tests can hand it a
//! mock and production can hand it [`AnthropicProvider`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use quip::{get_joke, AnthropicConfig, AnthropicProvider};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let provider = AnthropicProvider::new(AnthropicConfig::with_api_key("your-api-key"))?;
//! let joke = get_joke(Some(&provider)).await?;
//! println!("{joke}");
//! # Ok(())
//! # }
//! ```

pub mod core_types;

pub(crate) mod logging;

pub mod app;
pub mod config;
pub mod error;
pub mod providers;

#[cfg(test)]
pub mod tests;

pub use app::{get_joke, joke_messages, tell_joke};
pub use config::AnthropicConfig;
pub use core_types::{ChatMessage, ChatModel, MessageRole, RequestConfig, Response, TokenUsage};
pub use error::{LlmError, LlmResult};
pub use providers::AnthropicProvider;
