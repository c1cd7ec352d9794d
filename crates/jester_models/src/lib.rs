//! Model provider interface and service registry for Jester.
//!
//! Provides a unified interface for chat-completion backends, decoupling the
//! program from any specific provider implementation.
//!
//! # Overview
//!
//! - Provider-agnostic: consumers depend only on this crate, not on a concrete
//!   provider crate.
//!
//! - Named services: each backend is registered under a logical service id
//!   (e.g. `"gpt3"`) that binds a provider to a model name.
//!
//! - Explicit selection: callers pass [`ExecutionSettings`] naming the service
//!   they want. Without a service id, the registry's default is used.
//!
//! # Example
//!
//! ```ignore
//! use jester_models::{ExecutionSettings, ModelRegistry, ServiceRegistration};
//! use jester_models::llm::GenerationRequest;
//!
//! let mut registry = ModelRegistry::new();
//! registry.register(ServiceRegistration::new("gpt3", "gpt-3.5-turbo", provider).set_as_default(true))?;
//!
//! let settings = ExecutionSettings::default().with_temperature(0.8);
//! let llm = registry.resolve(&settings)?;
//! let response = llm.generate(settings.apply(GenerationRequest::new("Hello!"))).await?;
//! ```

pub mod error;
pub mod llm;
mod registry;
mod settings;

pub use registry::{ModelRegistry, ServiceRegistration};
pub use settings::ExecutionSettings;
