//! Per-call execution settings.

use crate::llm::GenerationRequest;

/// Settings passed explicitly at each call site.
///
/// Names the backend to use and carries the sampling parameters copied onto
/// each request. Leaving [`service_id`](Self::service_id) unset selects the
/// registry's default service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionSettings {
    /// Registered service to send requests to.
    pub service_id: Option<String>,
    /// Sampling temperature.
    pub temperature: Option<f32>,
    /// Upper bound on generated tokens.
    pub max_tokens: Option<u32>,
}

impl ExecutionSettings {
    /// Creates settings that target the default service with provider defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets a specific registered service.
    #[must_use]
    pub fn with_service(mut self, service_id: impl Into<String>) -> Self {
        self.service_id = Some(service_id.into());
        self
    }

    /// Sets the sampling temperature.
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets the maximum number of generated tokens.
    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Copies the tuning parameters onto `request`, keeping any value the
    /// request already sets when these settings leave it unset.
    #[must_use]
    pub fn apply(&self, mut request: GenerationRequest) -> GenerationRequest {
        if let Some(temperature) = self.temperature {
            request.temperature = Some(temperature);
        }
        if let Some(max_tokens) = self.max_tokens {
            request.max_tokens = Some(max_tokens);
        }
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_overrides_only_set_fields() {
        let settings = ExecutionSettings::new().with_temperature(0.8);
        let request = settings.apply(GenerationRequest::new("hi").max_tokens(32));

        assert_eq!(request.temperature, Some(0.8));
        assert_eq!(request.max_tokens, Some(32));
    }

    #[test]
    fn default_targets_no_specific_service() {
        assert_eq!(ExecutionSettings::default().service_id, None);
        assert_eq!(
            ExecutionSettings::new().with_service("gpt4").service_id.as_deref(),
            Some("gpt4")
        );
    }
}
