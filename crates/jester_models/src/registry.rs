//! Model service registry.

use crate::error::RegistryError;
use crate::llm::{Llm, LlmProvider};
use crate::settings::ExecutionSettings;
use indexmap::IndexMap;
use std::sync::Arc;

/// A backend to register: a logical service id bound to a provider and model.
///
/// ```ignore
/// let gpt3 = ServiceRegistration::new("gpt3", "gpt-3.5-turbo", provider.clone())
///     .set_as_default(true);
/// ```
#[derive(Clone)]
pub struct ServiceRegistration {
    service_id: String,
    model: String,
    provider: Arc<dyn LlmProvider>,
    set_as_default: bool,
}

impl ServiceRegistration {
    /// Creates a registration that is not flagged as the default.
    #[must_use]
    pub fn new(
        service_id: impl Into<String>,
        model: impl Into<String>,
        provider: Arc<dyn LlmProvider>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            model: model.into(),
            provider,
            set_as_default: false,
        }
    }

    /// Flags whether this service becomes the registry default.
    #[must_use]
    pub fn set_as_default(mut self, set_as_default: bool) -> Self {
        self.set_as_default = set_as_default;
        self
    }

    /// Returns the service id.
    #[must_use]
    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    /// Returns the model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl core::fmt::Debug for ServiceRegistration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ServiceRegistration")
            .field("service_id", &self.service_id)
            .field("model", &self.model)
            .field("set_as_default", &self.set_as_default)
            .finish_non_exhaustive()
    }
}

struct ServiceEntry {
    model: String,
    provider: Arc<dyn LlmProvider>,
}

/// Registry of named model services.
///
/// Service ids are unique. The registry holds a single default slot, so at most
/// one service is the default at any time:
///
/// - registering a service with [`set_as_default(true)`](ServiceRegistration::set_as_default)
///   makes it the default, replacing any earlier default;
/// - when no registration has been flagged, the first registered service is the default.
///
/// Consumers pick a backend explicitly through [`ExecutionSettings`] and
/// [`resolve()`](Self::resolve).
#[derive(Default)]
pub struct ModelRegistry {
    // Registration order is preserved.
    services: IndexMap<String, ServiceEntry>,
    default_service: Option<String>,
}

impl core::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("services", &self.service_ids())
            .field("default_service", &self.default_service)
            .finish()
    }
}

impl ModelRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            services: IndexMap::new(),
            default_service: None,
        }
    }

    /// Registers a model service.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateService`] if a service with the same id
    /// is already registered. The registry is left unchanged in that case.
    pub fn register(&mut self, registration: ServiceRegistration) -> Result<(), RegistryError> {
        let ServiceRegistration {
            service_id,
            model,
            provider,
            set_as_default,
        } = registration;

        if self.services.contains_key(&service_id) {
            return Err(RegistryError::DuplicateService(service_id));
        }

        if set_as_default || self.default_service.is_none() {
            if let Some(previous) = self.default_service.as_deref().filter(|_| set_as_default) {
                tracing::debug!(previous, service_id = %service_id, "replacing default model service");
            }
            self.default_service = Some(service_id.clone());
        }

        tracing::info!(
            service_id = %service_id,
            model = %model,
            default = self.default_service.as_deref() == Some(service_id.as_str()),
            "registered model service"
        );

        self.services
            .insert(service_id, ServiceEntry { model, provider });
        Ok(())
    }

    /// Creates a handle to the [`Llm`] registered under `service_id`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownService`] if no such service is registered.
    pub fn llm(&self, service_id: impl AsRef<str>) -> Result<Llm, RegistryError> {
        let service_id = service_id.as_ref();
        let entry = self
            .services
            .get(service_id)
            .ok_or_else(|| RegistryError::UnknownService(service_id.to_string()))?;

        Ok(Llm::new(
            Arc::clone(&entry.provider),
            service_id.to_string(),
            entry.model.clone(),
        ))
    }

    /// Creates a handle to the default service.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NoServices`] if the registry is empty.
    pub fn default_llm(&self) -> Result<Llm, RegistryError> {
        let service_id = self.default_service_id().ok_or(RegistryError::NoServices)?;
        self.llm(service_id)
    }

    /// Resolves the service named by `settings`, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the named service is unknown, or if no service id is
    /// given and the registry is empty.
    pub fn resolve(&self, settings: &ExecutionSettings) -> Result<Llm, RegistryError> {
        match settings.service_id.as_deref() {
            Some(service_id) => self.llm(service_id),
            None => self.default_llm(),
        }
    }

    /// Returns the id of the default service, if any service is registered.
    #[must_use]
    pub fn default_service_id(&self) -> Option<&str> {
        self.default_service.as_deref()
    }

    /// Checks if a service is registered.
    #[must_use]
    pub fn has_service(&self, service_id: impl AsRef<str>) -> bool {
        self.services.contains_key(service_id.as_ref())
    }

    /// Lists registered service ids in registration order.
    #[must_use]
    pub fn service_ids(&self) -> Vec<&str> {
        self.services.keys().map(String::as_str).collect()
    }

    /// Returns the number of registered services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Returns whether no service is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{GenerationError, GenerationRequest, GenerationResponse};
    use async_trait::async_trait;

    struct Echo;

    #[async_trait]
    impl LlmProvider for Echo {
        async fn generate(
            &self,
            model: &str,
            _request: GenerationRequest,
        ) -> Result<GenerationResponse, GenerationError> {
            Ok(GenerationResponse::text_only(model))
        }
    }

    fn echo() -> Arc<dyn LlmProvider> {
        Arc::new(Echo)
    }

    #[test]
    fn first_registration_becomes_default() {
        let mut registry = ModelRegistry::new();
        registry
            .register(ServiceRegistration::new("a", "model-a", echo()))
            .unwrap();
        registry
            .register(ServiceRegistration::new("b", "model-b", echo()))
            .unwrap();

        assert_eq!(registry.default_service_id(), Some("a"));
    }

    #[test]
    fn flagged_registration_replaces_default() {
        let mut registry = ModelRegistry::new();
        registry
            .register(ServiceRegistration::new("a", "model-a", echo()).set_as_default(true))
            .unwrap();
        registry
            .register(ServiceRegistration::new("b", "model-b", echo()).set_as_default(true))
            .unwrap();

        assert_eq!(registry.default_service_id(), Some("b"));
    }

    #[test]
    fn unflagged_registration_keeps_default() {
        let mut registry = ModelRegistry::new();
        registry
            .register(ServiceRegistration::new("b", "model-b", echo()))
            .unwrap();
        registry
            .register(ServiceRegistration::new("a", "model-a", echo()).set_as_default(true))
            .unwrap();
        registry
            .register(ServiceRegistration::new("c", "model-c", echo()))
            .unwrap();

        assert_eq!(registry.default_service_id(), Some("a"));
        assert_eq!(registry.service_ids(), vec!["b", "a", "c"]);
    }

    #[test]
    fn duplicate_is_rejected_and_registry_unchanged() {
        let mut registry = ModelRegistry::new();
        registry
            .register(ServiceRegistration::new("a", "model-a", echo()))
            .unwrap();

        let err = registry
            .register(ServiceRegistration::new("a", "other", echo()).set_as_default(true))
            .unwrap_err();

        assert_eq!(err, RegistryError::DuplicateService("a".to_string()));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.llm("a").unwrap().model_name(), "model-a");
    }

    #[test]
    fn empty_registry_has_no_default() {
        let registry = ModelRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(
            registry.default_llm().unwrap_err(),
            RegistryError::NoServices
        );
    }

    #[test]
    fn unknown_service_is_reported() {
        let registry = ModelRegistry::new();
        assert_eq!(
            registry.llm("missing").unwrap_err(),
            RegistryError::UnknownService("missing".to_string())
        );
    }
}
