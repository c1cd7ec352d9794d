//! Integration tests for the `OpenAI` provider.
//!
//! These tests are ignored by default because they require:
//! - `OPENAI_API_KEY` environment variable (or in `.env` file)
//! - `OPENAI_ORG_ID` environment variable (optional)
//! - Network access to the `OpenAI` API
//! - May incur API costs
//!
//! To run these tests:
//! ```sh
//! cargo test -p jester_model_providers --test openai_integration -- --ignored
//! ```

mod common;

use common::{LlmTestExt, init_env};
use jester_model_providers::openai::{OpenAiCredentials, OpenAiProvider};
use jester_models::llm::Llm;
use jester_models::{ModelRegistry, ServiceRegistration};
use std::sync::Arc;

fn get_llm(model: &str) -> Llm {
    init_env();

    let api_key = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY should be set");
    let organization = std::env::var("OPENAI_ORG_ID").unwrap_or_default();
    let provider = Arc::new(OpenAiProvider::new(OpenAiCredentials::new(
        api_key,
        organization,
    )));

    let mut registry = ModelRegistry::new();
    registry
        .register(ServiceRegistration::new("under_test", model, provider))
        .expect("registration should succeed");
    registry.default_llm().expect("model should be registered")
}

#[tokio::test]
#[ignore = "requires OPENAI_API_KEY"]
async fn test_basic_generation() {
    get_llm("gpt-3.5-turbo").test_basic_generation().await;
}

#[tokio::test]
#[ignore = "requires OPENAI_API_KEY"]
async fn test_system_prompt() {
    get_llm("gpt-3.5-turbo").test_system_prompt().await;
}

#[tokio::test]
#[ignore = "requires OPENAI_API_KEY"]
async fn test_invalid_model_error() {
    get_llm("not-a-real-model").test_invalid_model_error().await;
}
