//! Knock-knock joke teller built with Jester.
//!
//! Loads OpenAI credentials from a local file, registers two chat-completion
//! backends, asks a [`ThemeSource`] for a random theme and has the model write a
//! knock-knock joke about it.
//!
//! # Flow
//!
//! ```text
//! settings file ──▶ credentials ──▶ registry (gpt3*, gpt4)
//!                                         │
//! ThemeSource ──▶ theme ──▶ prompt ───────┴──▶ completion ──▶ stdout
//! ```
//!
//! Output is exactly two lines: `I will tell a joke about <theme>` and the
//! generated joke.

mod error;
pub mod settings;
pub mod show_manager;
pub mod telemetry;

pub use error::RunError;
pub use settings::{ConfigurationError, DEFAULT_SETTINGS_PATH, Settings};
pub use show_manager::{PluginError, ShowManager, ThemeSource};

use jester_model_providers::openai::OpenAiCredentials;
use jester_models::error::RegistryError;
use jester_models::llm::LlmProvider;
use jester_models::{ExecutionSettings, ModelRegistry, ServiceRegistration};
use jester_prompts::{ContextVariables, FunctionResult, PromptFunction, TemplateError};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// Service id of the default backend.
pub const DEFAULT_SERVICE: &str = "gpt3";
/// Service id of the alternate backend.
pub const ALTERNATE_SERVICE: &str = "gpt4";

const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const ALTERNATE_MODEL: &str = "gpt-4";

/// The joke prompt. `{{$input}}` receives the theme.
pub const JOKE_PROMPT: &str =
    "Finish the following knock-knock joke. Knock, knock. Who's there? {{$input}}.";

/// Sampling temperature used for jokes unless overridden.
pub const JOKE_TEMPERATURE: f32 = 0.8;

/// Registers the `gpt3` (default) and `gpt4` backends on `registry`.
///
/// Both services share `provider`.
///
/// # Errors
///
/// Returns [`RegistryError::DuplicateService`] if either id is already taken.
pub fn register_backends(
    registry: &mut ModelRegistry,
    provider: Arc<dyn LlmProvider>,
) -> Result<(), RegistryError> {
    registry.register(
        ServiceRegistration::new(DEFAULT_SERVICE, DEFAULT_MODEL, Arc::clone(&provider))
            .set_as_default(true),
    )?;
    registry.register(ServiceRegistration::new(
        ALTERNATE_SERVICE,
        ALTERNATE_MODEL,
        provider,
    ))
}

/// Builds the joke prompt function with [`JOKE_TEMPERATURE`].
///
/// # Errors
///
/// Returns a [`TemplateError`] if [`JOKE_PROMPT`] fails to parse.
pub fn joke_function() -> Result<PromptFunction, TemplateError> {
    PromptFunction::from_source(
        JOKE_PROMPT,
        ExecutionSettings::new().with_temperature(JOKE_TEMPERATURE),
    )
}

/// Picks a theme, announces it on `out`, then writes the generated joke.
///
/// Exactly one completion request is sent. Nothing is retried.
///
/// # Errors
///
/// Returns [`RunError::Registry`] if the function's service is not registered
/// (the theme source is not asked and nothing is written),
/// [`RunError::Plugin`] if no theme could be obtained (no request is sent),
/// [`RunError::ExternalService`] if the completion fails, and [`RunError::Io`]
/// if `out` cannot be written.
pub async fn tell_joke<W: Write>(
    registry: &ModelRegistry,
    themes: &dyn ThemeSource,
    function: &PromptFunction,
    out: &mut W,
) -> Result<FunctionResult, RunError> {
    // Unknown services fail before any output.
    registry.resolve(function.settings())?;

    let theme = themes.random_theme().await?;
    writeln!(out, "I will tell a joke about {theme}")?;

    let joke = function
        .invoke(registry, &ContextVariables::from_input(theme))
        .await?;
    writeln!(out, "{joke}")?;
    out.flush()?;

    tracing::info!(
        service_id = %joke.service_id,
        input_tokens = ?joke.usage.input_tokens,
        output_tokens = ?joke.usage.output_tokens,
        "joke delivered"
    );
    Ok(joke)
}

/// Options for [`run`].
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Credentials file.
    pub settings_path: PathBuf,
    /// Settings for the joke function.
    pub execution: ExecutionSettings,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
            execution: ExecutionSettings::new().with_temperature(JOKE_TEMPERATURE),
        }
    }
}

/// Runs the whole program: load credentials, connect, register, tell a joke.
///
/// `connect` turns the loaded credentials into a provider. It is not called
/// when credentials fail to load.
///
/// # Errors
///
/// Returns [`RunError::Configuration`] for credential problems, otherwise any
/// error from [`register_backends`] or [`tell_joke`].
pub async fn run<W, F>(
    options: &RunOptions,
    themes: &dyn ThemeSource,
    connect: F,
    out: &mut W,
) -> Result<FunctionResult, RunError>
where
    W: Write,
    F: FnOnce(&OpenAiCredentials) -> Arc<dyn LlmProvider>,
{
    let credentials = Settings::load_from_file(&options.settings_path)?;
    let provider = connect(&credentials);

    let mut registry = ModelRegistry::new();
    register_backends(&mut registry, provider)?;

    let function = joke_function()?.with_settings(options.execution.clone());
    tell_joke(&registry, themes, &function, out).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joke_prompt_has_single_input_placeholder() {
        let function = joke_function().unwrap();
        assert_eq!(function.template().variables(), vec!["input"]);
        assert_eq!(JOKE_PROMPT.matches("{{$input}}").count(), 1);
        assert_eq!(function.settings().temperature, Some(JOKE_TEMPERATURE));
    }

    #[test]
    fn default_options_use_joke_temperature() {
        let options = RunOptions::default();
        assert_eq!(options.settings_path, PathBuf::from("config/settings.json"));
        assert_eq!(options.execution.temperature, Some(JOKE_TEMPERATURE));
        assert!(options.execution.service_id.is_none());
    }
}
