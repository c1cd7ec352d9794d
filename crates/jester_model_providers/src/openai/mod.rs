//! `OpenAI` provider backend.
//!
//! Uses the `OpenAI` Chat Completions API.

mod client;
mod credentials;
mod provider;
mod types;

pub use client::OpenAiClient;
pub use credentials::OpenAiCredentials;
pub use provider::OpenAiProvider;
