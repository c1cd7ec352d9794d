//! `OpenAI` Chat Completions API types.
//!
//! These types match the subset of the Chat Completions API this crate uses.
//! See: <https://platform.openai.com/docs/api-reference/chat>

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Request Types
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for the Chat Completions API.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// The model to use.
    pub model: String,
    /// Input messages, system prompt first.
    pub messages: Vec<ChatMessage>,
    /// Temperature for sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A message in the conversation.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Response Types
// ─────────────────────────────────────────────────────────────────────────────

/// Response from the Chat Completions API.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Unique completion ID.
    pub id: String,
    /// Model used.
    pub model: String,
    /// Generated choices. Only the first one is read.
    pub choices: Vec<Choice>,
    /// Token usage.
    pub usage: Option<UsageResponse>,
}

/// One generated alternative.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The generated message.
    pub message: ResponseMessage,
    /// Reason generation stopped.
    pub finish_reason: Option<String>,
}

/// Message returned inside a [`Choice`].
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Generated text. Absent when the model refused.
    pub content: Option<String>,
    /// Refusal text, when the model declined to answer.
    #[serde(default)]
    pub refusal: Option<String>,
}

/// Token usage information.
#[derive(Debug, Clone, Deserialize)]
pub struct UsageResponse {
    /// Tokens in the prompt.
    pub prompt_tokens: u64,
    /// Tokens generated.
    pub completion_tokens: u64,
    /// Sum of both.
    pub total_tokens: u64,
}

/// Error envelope returned with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
