// LLM abstraction layer

pub mod provider;
pub mod openai;
pub mod google;

pub use provider::*;
pub use crate::types::{LLMMessage, LLMProvider, LLMRequest, LLMResponse, TokenUsage};

#[cfg(test)]
pub mod fake;
