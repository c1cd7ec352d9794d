//! Shared fixtures for knock-knock integration tests.

use async_trait::async_trait;
use jester_models::llm::{
    GenerationError, GenerationRequest, GenerationResponse, LlmProvider, Usage,
};
use knock_knock::{PluginError, ThemeSource};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

pub const JOKE: &str = "Knock, knock. Who's there? Snoop. Snoop who? Snoop Dogg, now open up!";

/// Completion provider returning a canned joke (or error) and recording calls.
pub struct MockProvider {
    calls: AtomicUsize,
    requests: Mutex<Vec<(String, GenerationRequest)>>,
    fail: bool,
}

impl MockProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            fail: false,
        })
    }

    /// Every call fails with an HTTP 503 provider error.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<(String, GenerationRequest)> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    async fn generate(
        &self,
        model: &str,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push((model.to_string(), request));

        if self.fail {
            return Err(GenerationError::Provider {
                status: Some(503),
                message: "service unavailable".to_string(),
            });
        }
        Ok(GenerationResponse {
            content: JOKE.to_string(),
            usage: Usage {
                input_tokens: Some(30),
                output_tokens: Some(18),
                total_tokens: Some(48),
            },
            finish_reason: None,
        })
    }
}

/// Theme source that always returns the same result.
pub struct FixedTheme(pub Result<String, PluginError>);

impl FixedTheme {
    pub fn new(theme: &str) -> Self {
        Self(Ok(theme.to_string()))
    }
}

#[async_trait]
impl ThemeSource for FixedTheme {
    async fn random_theme(&self) -> Result<String, PluginError> {
        self.0.clone()
    }
}

/// Writes a JSON settings file with valid credentials.
pub fn write_settings(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"apikey": "sk-test", "orgId": "org-test"}"#).unwrap();
    path
}
