//! Error types for the model registry.

/// Error registering or resolving a model service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A service with the same id is already registered.
    #[error("service '{0}' is already registered")]
    DuplicateService(String),

    /// The requested service id was not found in the registry.
    #[error("unknown service: {0}")]
    UnknownService(String),

    /// No service has been registered, so there is no default to fall back on.
    #[error("no model services are registered")]
    NoServices,
}
