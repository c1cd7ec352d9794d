//! LLM (Large Language Model) text completion.
//!
//! This module provides the core trait and types for sending a prompt to a
//! chat-completion backend and reading the generated text back.

mod error;
mod model;
mod provider;
mod types;

pub use error::GenerationError;
pub use model::Llm;
pub use provider::LlmProvider;
pub use types::{FinishReason, GenerationRequest, GenerationResponse, Message, Usage};
