//! Anthropic Claude provider implementation
//!
//! This provider uses Anthropic's native API format with the Messages API.
//!
//! ## Module Organization
//!
//! - `types`: Request/response structures for Anthropic API
//! - `conversion`: Message conversion between chat messages and Anthropic format
//! - `provider`: Main provider implementation

mod conversion;
mod provider;
mod types;

#[cfg(test)]
mod tests;

pub use provider::AnthropicProvider;
