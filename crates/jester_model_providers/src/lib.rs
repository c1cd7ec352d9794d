//! Model provider backends for Jester.
//!
//! Each provider implements [`LlmProvider`](jester_models::llm::LlmProvider) and is
//! registered with a [`ModelRegistry`](jester_models::ModelRegistry) under one or
//! more service ids.
//!
//! # Supported Providers
//!
//! | Provider | Feature Flag | Description |
//! |----------|--------------|-------------|
//! | `OpenAI` | `openai` (default) | `OpenAI` Chat Completions API |
//!
//! # Usage
//!
//! ```no_run
//! # #[cfg(feature = "openai")]
//! # {
//! use jester_model_providers::openai::{OpenAiCredentials, OpenAiProvider};
//! use jester_models::{ModelRegistry, ServiceRegistration};
//! use std::sync::Arc;
//!
//! let credentials = OpenAiCredentials::new("sk-...", "org-...");
//! let provider = Arc::new(OpenAiProvider::new(credentials));
//!
//! let mut registry = ModelRegistry::new();
//! registry
//!     .register(ServiceRegistration::new("gpt3", "gpt-3.5-turbo", provider).set_as_default(true))
//!     .unwrap();
//! # }
//! ```

#[cfg(feature = "openai")]
pub mod openai;

#[cfg(feature = "openai")]
pub use openai::OpenAiProvider;
