//! Error types for prompt rendering and invocation.

use jester_models::error::RegistryError;
use jester_models::llm::GenerationError;
use thiserror::Error;

/// Errors raised while parsing or rendering a [`PromptTemplate`](crate::PromptTemplate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A `{{` was opened at the given byte offset and never closed.
    #[error("unterminated block starting at byte {0}")]
    Unterminated(usize),

    /// A block's contents are not a `$variable` reference.
    #[error("unsupported block '{{{{{0}}}}}': only $variable references are allowed")]
    UnsupportedBlock(String),

    /// A variable reference has an empty or malformed name.
    #[error("invalid variable name '{0}'")]
    InvalidVariableName(String),

    /// The template references a variable the context does not provide.
    #[error("missing value for variable '{0}'")]
    MissingVariable(String),
}

/// Errors raised by [`PromptFunction::invoke`](crate::PromptFunction::invoke).
#[derive(Debug, Error)]
pub enum PromptError {
    /// The prompt could not be rendered.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// The requested service could not be resolved.
    #[error("service error: {0}")]
    Registry(#[from] RegistryError),

    /// The completion request failed.
    #[error("completion failed: {0}")]
    Generation(#[from] GenerationError),
}

impl TemplateError {
    /// Creates an [`InvalidVariableName`](Self::InvalidVariableName).
    pub fn invalid_variable_name(name: impl Into<String>) -> Self {
        Self::InvalidVariableName(name.into())
    }

    /// Creates a [`MissingVariable`](Self::MissingVariable).
    pub fn missing_variable(name: impl Into<String>) -> Self {
        Self::MissingVariable(name.into())
    }
}
