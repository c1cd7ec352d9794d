//! API credentials.

/// An `OpenAI` API key paired with the organization it is billed to.
#[derive(Clone, PartialEq, Eq)]
pub struct OpenAiCredentials {
    api_key: String,
    organization: String,
}

impl OpenAiCredentials {
    /// Creates credentials from an API key and organization id.
    #[must_use]
    pub fn new(api_key: impl Into<String>, organization: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            organization: organization.into(),
        }
    }

    /// Returns the API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the organization id.
    #[must_use]
    pub fn organization(&self) -> &str {
        &self.organization
    }
}

impl core::fmt::Debug for OpenAiCredentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OpenAiCredentials")
            .field("api_key", &"[REDACTED]")
            .field("organization", &self.organization)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_key() {
        let credentials = OpenAiCredentials::new("sk-secret", "org-123");
        let debug = format!("{credentials:?}");

        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("org-123"));
    }
}
