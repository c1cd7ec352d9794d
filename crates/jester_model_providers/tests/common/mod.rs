//! Shared test helpers for provider integration tests.

use std::future::Future;
use std::sync::Once;

use jester_models::llm::{GenerationRequest, Llm};

static INIT: Once = Once::new();

/// Initialize environment variables from `.env` file (once).
pub fn init_env() {
    INIT.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

/// Extension trait for testing LLM providers.
pub trait LlmTestExt {
    /// Tests basic generation - expects the model to say "hello".
    fn test_basic_generation(&self) -> impl Future<Output = ()> + Send;

    /// Tests generation with a system prompt and temperature.
    fn test_system_prompt(&self) -> impl Future<Output = ()> + Send;

    /// Tests that an invalid model returns an error.
    fn test_invalid_model_error(&self) -> impl Future<Output = ()> + Send;
}

impl LlmTestExt for Llm {
    async fn test_basic_generation(&self) {
        let request = GenerationRequest::new("Say 'hello' and nothing else.");

        let response = self
            .generate(request)
            .await
            .expect("generation should succeed");

        let text = response.text().to_lowercase();
        assert!(
            text.contains("hello"),
            "response should contain 'hello': {text}"
        );
    }

    async fn test_system_prompt(&self) {
        let request = GenerationRequest::with_system(
            "You are a comedian. Keep every answer under twenty words.",
            "Finish this knock-knock joke: Knock, knock. Who's there? Boo.",
        )
        .temperature(0.8)
        .max_tokens(60);

        let response = self
            .generate(request)
            .await
            .expect("generation should succeed");

        assert!(!response.text().is_empty(), "response should not be empty");
    }

    async fn test_invalid_model_error(&self) {
        let request = GenerationRequest::new("Hello");
        let result = self.generate(request).await;

        assert!(result.is_err(), "should fail with invalid model");
    }
}
