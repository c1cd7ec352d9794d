//! Prompt templates and named chat-completion services for LLM-backed programs.
//!

/// Provider-agnostic LLM types and the service registry.
pub use jester_models;

/// Concrete completion providers.
pub use jester_model_providers;

/// Prompt templates and prompt functions.
pub use jester_prompts;

/// Re-export all common types for easy access.
pub mod prelude {
    #[cfg(feature = "openai")]
    pub use jester_model_providers::openai::{OpenAiCredentials, OpenAiProvider};
    pub use jester_models::llm::{GenerationError, GenerationRequest, GenerationResponse, Llm, LlmProvider};
    pub use jester_models::{ExecutionSettings, ModelRegistry, ServiceRegistration};
    pub use jester_prompts::{ContextVariables, FunctionResult, PromptFunction, PromptTemplate};
}
