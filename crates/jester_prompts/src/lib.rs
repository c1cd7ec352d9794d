//! Prompt templates and prompt functions for Jester.
//!
//! A [`PromptTemplate`] is text with `{{$name}}` placeholders. A
//! [`PromptFunction`] pairs a template with [`ExecutionSettings`] and sends the
//! rendered prompt to a service resolved from a [`ModelRegistry`].
//!
//! # Quick Start
//!
//! ```ignore
//! use jester_prompts::{ContextVariables, PromptFunction, PromptTemplate};
//! use jester_models::ExecutionSettings;
//!
//! let template = PromptTemplate::new("Tell a joke about {{$input}}.")?;
//! let function = PromptFunction::new(template, ExecutionSettings::new().with_temperature(0.8));
//!
//! let result = function
//!     .invoke(&registry, &ContextVariables::from_input("penguins"))
//!     .await?;
//! println!("{result}");
//! ```
//!
//! # Architecture
//!
//! - [`PromptTemplate`] parses placeholders once and renders them literally
//! - [`ContextVariables`] holds the values substituted into a template
//! - [`PromptFunction`] renders a template and performs one completion
//! - [`FunctionResult`] carries the generated text and token usage
//!
//! [`ExecutionSettings`]: jester_models::ExecutionSettings
//! [`ModelRegistry`]: jester_models::ModelRegistry

pub mod error;
pub mod function;
pub mod template;
pub mod variables;

// Re-export core types at crate root.
pub use error::{PromptError, TemplateError};
pub use function::{FunctionResult, PromptFunction};
pub use template::PromptTemplate;
pub use variables::ContextVariables;
