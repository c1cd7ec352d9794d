//! LLM handle for generation requests.

use super::error::GenerationError;
use super::provider::LlmProvider;
use super::types::{GenerationRequest, GenerationResponse};
use std::sync::Arc;

/// An LLM handle for making generation requests.
///
/// Created via [`ModelRegistry::llm()`](crate::ModelRegistry::llm) or
/// [`ModelRegistry::resolve()`](crate::ModelRegistry::resolve).
#[derive(Clone)]
pub struct Llm {
    provider: Arc<dyn LlmProvider>,
    service_id: String,
    model: String,
}

impl core::fmt::Debug for Llm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Llm")
            .field("service_id", &self.service_id)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl Llm {
    /// Creates a new LLM handle from a provider, service id and model name.
    #[must_use]
    pub(crate) fn new(provider: Arc<dyn LlmProvider>, service_id: String, model: String) -> Self {
        Self {
            provider,
            service_id,
            model,
        }
    }

    /// Sends a generation request to the model.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] if the request fails.
    pub async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        tracing::debug!(
            service_id = %self.service_id,
            model = %self.model,
            temperature = ?request.temperature,
            "sending generation request"
        );
        self.provider.generate(&self.model, request).await
    }

    /// Returns the model name passed to the provider.
    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Returns the service id this handle was registered under.
    #[must_use]
    pub fn service_id(&self) -> &str {
        &self.service_id
    }
}
