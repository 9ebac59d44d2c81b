//! Core types for the provider-agnostic chat model interface
//!
//! ## Organization
//! - `messages` - Role-tagged chat messages
//! - `provider` - The `ChatModel` trait plus its request/response types

pub mod messages;
pub mod provider;

pub use messages::{ChatMessage, MessageRole};
pub use provider::{ChatModel, RequestConfig, Response, TokenUsage};

#[cfg(test)]
pub use provider::MockChatModel;
