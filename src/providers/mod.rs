//! Chat model adapters
//!
//! Each adapter implements [`ChatModel`](crate::ChatModel) for one external
//! provider and owns all of that provider's request/response translation.
//! Switching providers means adding a sibling module here and handing the
//! new adapter to the application instead.
//!
//! - **anthropic**: Anthropic Claude via the native Messages API

pub mod anthropic;

pub use anthropic::AnthropicProvider;
