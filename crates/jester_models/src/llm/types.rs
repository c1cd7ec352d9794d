//! Core types for LLM generation requests and responses.

use serde::{Deserialize, Serialize};

// ─────────────────────
// Request / Response
// ─────────────────────

/// A generation request to a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// System prompt for the model.
    pub system: Option<String>,
    /// The messages to send to the model.
    pub messages: Vec<Message>,
    /// Sampling temperature. Higher values produce more varied output.
    pub temperature: Option<f32>,
    /// Upper bound on the number of generated tokens.
    pub max_tokens: Option<u32>,
}

impl GenerationRequest {
    /// Creates a new generation request with a user message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jester_models::llm::GenerationRequest;
    ///
    /// let request = GenerationRequest::new("Tell me a joke");
    /// assert_eq!(request.messages.len(), 1);
    /// ```
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            system: None,
            messages: vec![Message::user(message)],
            temperature: None,
            max_tokens: None,
        }
    }

    /// Creates a new generation request with a system prompt and user message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jester_models::llm::GenerationRequest;
    ///
    /// let request = GenerationRequest::with_system(
    ///     "You are a comedian",
    ///     "Tell me a joke"
    /// );
    /// assert_eq!(request.system.as_deref(), Some("You are a comedian"));
    /// ```
    #[must_use]
    pub fn with_system(system: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            ..Self::new(message)
        }
    }

    /// Sets the system prompt for the model.
    #[must_use]
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Sets the sampling temperature.
    #[must_use]
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets the maximum number of tokens to generate.
    #[must_use]
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Returns the text of the last user message, if any.
    #[must_use]
    pub fn last_user_text(&self) -> Option<&str> {
        self.messages.iter().rev().find_map(|message| match message {
            Message::User { content } => Some(content.as_str()),
            Message::Assistant { .. } => None,
        })
    }
}

/// A generation response from a model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// The generated text.
    pub content: String,
    /// Token usage information.
    pub usage: Usage,
    /// Why the model stopped generating, when the provider reports it.
    pub finish_reason: Option<FinishReason>,
}

impl GenerationResponse {
    /// Creates a response carrying only generated text.
    #[must_use]
    pub fn text_only(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Returns the generated text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.content
    }
}

/// Token usage information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Number of tokens in the input.
    pub input_tokens: Option<u64>,
    /// Number of tokens in the output.
    pub output_tokens: Option<u64>,
    /// Total tokens (input + output).
    pub total_tokens: Option<u64>,
}

/// Reason a completion ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// The model reached a natural stopping point.
    Stop,
    /// The token limit was reached.
    Length,
    /// Output was withheld by a content filter.
    ContentFilter,
    /// Any other provider-specific reason.
    Other(String),
}

// ─────────────────────
// Messages
// ─────────────────────

/// An input (user) or output (assistant) message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Message {
    /// A message from the user.
    User {
        /// Message text.
        content: String,
    },
    /// A message produced by the model.
    Assistant {
        /// Message text.
        content: String,
    },
}

impl Message {
    /// Creates a user message.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::User {
            content: text.into(),
        }
    }

    /// Creates an assistant message.
    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::Assistant {
            content: text.into(),
        }
    }

    /// Returns the message text.
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Self::User { content } | Self::Assistant { content } => content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_tuning_parameters() {
        let request = GenerationRequest::new("hi")
            .system("be brief")
            .temperature(0.8)
            .max_tokens(64);

        assert_eq!(request.system.as_deref(), Some("be brief"));
        assert_eq!(request.temperature, Some(0.8));
        assert_eq!(request.max_tokens, Some(64));
        assert_eq!(request.last_user_text(), Some("hi"));
    }

    #[test]
    fn last_user_text_skips_assistant_messages() {
        let mut request = GenerationRequest::new("first");
        request.messages.push(Message::assistant("reply"));

        assert_eq!(request.last_user_text(), Some("first"));
    }

    #[test]
    fn message_serializes_with_role_tag() {
        let json = serde_json::to_value(Message::user("hello")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hello"}));
    }
}
