//! Prompt functions: a template bound to execution settings.

use crate::error::{PromptError, TemplateError};
use crate::template::PromptTemplate;
use crate::variables::ContextVariables;
use jester_models::llm::{GenerationRequest, Usage};
use jester_models::{ExecutionSettings, ModelRegistry};

/// A prompt template paired with the settings it runs with.
///
/// Each [`invoke`](Self::invoke) renders the template, resolves the target
/// service from the registry and issues exactly one completion request. No
/// retries are attempted.
#[derive(Debug, Clone)]
pub struct PromptFunction {
    template: PromptTemplate,
    settings: ExecutionSettings,
}

/// Output of a [`PromptFunction`] invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionResult {
    /// The generated text.
    pub text: String,
    /// Token usage reported by the provider.
    pub usage: Usage,
    /// Service that produced the text.
    pub service_id: String,
}

impl core::fmt::Display for FunctionResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.text)
    }
}

impl PromptFunction {
    /// Creates a prompt function.
    #[must_use]
    pub fn new(template: PromptTemplate, settings: ExecutionSettings) -> Self {
        Self { template, settings }
    }

    /// Parses `source` and creates a prompt function from it.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] if `source` is not a valid template.
    pub fn from_source(
        source: impl Into<String>,
        settings: ExecutionSettings,
    ) -> Result<Self, TemplateError> {
        Ok(Self::new(PromptTemplate::new(source)?, settings))
    }

    /// Returns the template.
    #[must_use]
    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// Returns the execution settings.
    #[must_use]
    pub fn settings(&self) -> &ExecutionSettings {
        &self.settings
    }

    /// Returns a copy of this function running with different settings.
    #[must_use]
    pub fn with_settings(&self, settings: ExecutionSettings) -> Self {
        Self {
            template: self.template.clone(),
            settings,
        }
    }

    /// Renders the prompt without sending it.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] if a referenced variable is missing.
    pub fn render(&self, variables: &ContextVariables) -> Result<String, TemplateError> {
        self.template.render(variables)
    }

    /// Renders the prompt and sends it to the configured service.
    ///
    /// # Errors
    ///
    /// Returns a [`PromptError`] if rendering fails, the service cannot be
    /// resolved, or the completion request fails. Rendering and resolution
    /// happen before any request is sent.
    pub async fn invoke(
        &self,
        registry: &ModelRegistry,
        variables: &ContextVariables,
    ) -> Result<FunctionResult, PromptError> {
        let prompt = self.render(variables)?;
        let llm = registry.resolve(&self.settings)?;

        let request = self.settings.apply(GenerationRequest::new(prompt));
        let response = llm.generate(request).await?;

        tracing::info!(
            service_id = llm.service_id(),
            model = llm.model_name(),
            total_tokens = ?response.usage.total_tokens,
            "prompt function completed"
        );

        Ok(FunctionResult {
            text: response.content,
            usage: response.usage,
            service_id: llm.service_id().to_string(),
        })
    }
}
