//! `OpenAI` [`LlmProvider`] implementation using the Chat Completions API.

use super::client::OpenAiClient;
use super::credentials::OpenAiCredentials;
use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Role};
use async_trait::async_trait;
use jester_models::llm::{
    FinishReason, GenerationError, GenerationRequest, GenerationResponse, LlmProvider, Message,
    Usage,
};

/// `OpenAI` [`LlmProvider`] implementation.
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: OpenAiClient,
}

impl OpenAiProvider {
    /// Creates a new provider for the public `OpenAI` endpoint.
    #[must_use]
    pub fn new(credentials: OpenAiCredentials) -> Self {
        Self {
            client: OpenAiClient::new(credentials),
        }
    }

    /// Creates a provider around a preconfigured client.
    #[must_use]
    pub fn with_client(client: OpenAiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn generate(
        &self,
        model: &str,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let openai_request = convert_request(model, &request)?;

        let response = self.client.create_chat_completion(&openai_request).await?;

        convert_response(response)
    }
}

// ---------------------------------------------------------------------------
// Request conversion (Jester -> OpenAI)
// ---------------------------------------------------------------------------

fn convert_request(
    model: &str,
    request: &GenerationRequest,
) -> Result<ChatCompletionRequest, GenerationError> {
    if request.messages.is_empty() {
        return Err(GenerationError::InvalidRequest(
            "Chat completion requires at least one message".to_string(),
        ));
    }

    let system = request.system.iter().map(|system| ChatMessage {
        role: Role::System,
        content: system.clone(),
    });
    let messages = system
        .chain(request.messages.iter().map(convert_message))
        .collect();

    Ok(ChatCompletionRequest {
        model: model.to_string(),
        messages,
        temperature: request.temperature,
        max_tokens: request.max_tokens,
    })
}

fn convert_message(message: &Message) -> ChatMessage {
    match message {
        Message::User { content } => ChatMessage {
            role: Role::User,
            content: content.clone(),
        },
        Message::Assistant { content } => ChatMessage {
            role: Role::Assistant,
            content: content.clone(),
        },
    }
}

// ---------------------------------------------------------------------------
// Response conversion (OpenAI -> Jester)
// ---------------------------------------------------------------------------

fn convert_response(response: ChatCompletionResponse) -> Result<GenerationResponse, GenerationError> {
    let ChatCompletionResponse {
        id,
        model,
        choices,
        usage,
    } = response;

    if choices.len() > 1 {
        tracing::warn!(
            id = %id,
            choices = choices.len(),
            "OpenAI returned several choices, keeping the first"
        );
    }

    let choice = choices.into_iter().next().ok_or_else(|| {
        GenerationError::InvalidResponse(format!("completion {id} contained no choices"))
    })?;

    if let Some(refusal) = choice.message.refusal {
        return Err(GenerationError::Refusal(refusal));
    }

    let usage = usage
        .map(|usage| Usage {
            input_tokens: Some(usage.prompt_tokens),
            output_tokens: Some(usage.completion_tokens),
            total_tokens: Some(usage.total_tokens),
        })
        .unwrap_or_default();

    tracing::debug!(id = %id, model = %model, ?usage, "received chat completion");

    Ok(GenerationResponse {
        content: choice.message.content.unwrap_or_default(),
        usage,
        finish_reason: choice.finish_reason.map(convert_finish_reason),
    })
}

fn convert_finish_reason(reason: String) -> FinishReason {
    match reason.as_str() {
        "stop" => FinishReason::Stop,
        "length" => FinishReason::Length,
        "content_filter" => FinishReason::ContentFilter,
        _ => FinishReason::Other(reason),
    }
}
