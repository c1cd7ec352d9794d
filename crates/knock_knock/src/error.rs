//! Program error type.

use crate::settings::ConfigurationError;
use crate::show_manager::PluginError;
use jester_models::error::RegistryError;
use jester_models::llm::GenerationError;
use jester_prompts::{PromptError, TemplateError};

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Credentials could not be loaded. Raised before any network call.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The completion service failed.
    #[error("external service error: {0}")]
    ExternalService(#[from] GenerationError),

    /// The theme source failed.
    #[error("plugin error: {0}")]
    Plugin(#[from] PluginError),

    /// Backend registration or lookup failed.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// The prompt template was invalid or could not be rendered.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// Writing program output failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PromptError> for RunError {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::Template(err) => Self::Template(err),
            PromptError::Registry(err) => Self::Registry(err),
            PromptError::Generation(err) => Self::ExternalService(err),
        }
    }
}

impl RunError {
    /// Returns `true` for failures of an external dependency (completion
    /// service or theme source).
    #[must_use]
    pub fn is_external(&self) -> bool {
        matches!(self, Self::ExternalService(_) | Self::Plugin(_))
    }
}
