//! Tracing subscriber setup for the binary.
//!
//! Everything is written to stderr; stdout carries only the program output.
//!
//! ```
//! use knock_knock::telemetry::{TracingConfig, TracingFormat};
//! use tracing::Level;
//!
//! let config = TracingConfig::new()
//!     .with_level(Level::DEBUG)
//!     .with_format(TracingFormat::Compact)
//!     .with_env_filter("knock_knock=debug,jester_model_providers=info");
//! assert_eq!(config.level(), Level::DEBUG);
//! ```

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

// ─────────────────────────────────────────────────────────────────────────────
// TracingFormat
// ─────────────────────────────────────────────────────────────────────────────

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TracingFormat {
    /// Human-readable multi-line output.
    Pretty,
    /// Compact single-line output (default).
    #[default]
    Compact,
    /// JSON structured output for log aggregation.
    Json,
}

// ─────────────────────────────────────────────────────────────────────────────
// TracingConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Builder for the global tracing subscriber.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    level: Level,
    format: TracingFormat,
    /// Target filter, e.g. `"knock_knock=debug,reqwest=warn"`.
    env_filter: Option<String>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            format: TracingFormat::Compact,
            env_filter: None,
        }
    }
}

impl TracingConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum log level.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: TracingFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets a target filter, overriding the plain level.
    ///
    /// Format: `target=level,target=level,...`
    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Returns the configured level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the configured format.
    #[must_use]
    pub fn format(&self) -> TracingFormat {
        self.format
    }

    /// Builds the filter. The second value is the parse error when the custom
    /// filter was rejected and the plain level used instead.
    fn filter(&self) -> (EnvFilter, Option<String>) {
        match &self.env_filter {
            Some(filter) => match EnvFilter::try_new(filter) {
                Ok(env_filter) => (env_filter, None),
                Err(err) => (EnvFilter::new(self.level.as_str()), Some(err.to_string())),
            },
            None => (EnvFilter::new(self.level.as_str()), None),
        }
    }

    /// Installs the global subscriber.
    ///
    /// Does nothing if a subscriber is already installed.
    pub fn init(&self) {
        let (env_filter, rejected) = self.filter();

        // try_init().ok() ignores errors if already initialized
        match self.format {
            TracingFormat::Pretty => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .pretty()
                            .with_writer(std::io::stderr),
                    )
                    .try_init()
                    .ok();
            }
            TracingFormat::Compact => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .compact()
                            .with_writer(std::io::stderr),
                    )
                    .try_init()
                    .ok();
            }
            TracingFormat::Json => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(std::io::stderr),
                    )
                    .try_init()
                    .ok();
            }
        }

        if let Some(error) = rejected {
            tracing::warn!(
                filter = self.env_filter.as_deref().unwrap_or_default(),
                %error,
                level = %self.level,
                "ignoring invalid log filter"
            );
        }
        tracing::debug!(level = %self.level, format = ?self.format, "tracing initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_format_is_compact() {
        assert_eq!(TracingFormat::default(), TracingFormat::Compact);
    }

    #[test]
    fn default_level_is_warn() {
        assert_eq!(TracingConfig::default().level(), Level::WARN);
    }

    #[test]
    fn builder_sets_fields() {
        let config = TracingConfig::new()
            .with_level(Level::DEBUG)
            .with_format(TracingFormat::Json)
            .with_env_filter("knock_knock=trace");

        assert_eq!(config.level(), Level::DEBUG);
        assert_eq!(config.format(), TracingFormat::Json);
        assert_eq!(config.env_filter.as_deref(), Some("knock_knock=trace"));
    }

    #[test]
    fn invalid_filter_is_reported() {
        let (_, rejected) = TracingConfig::new()
            .with_env_filter("knock_knock=loud")
            .filter();
        assert!(rejected.is_some());

        let (_, rejected) = TracingConfig::new()
            .with_env_filter("knock_knock=debug,reqwest=warn")
            .filter();
        assert!(rejected.is_none());
    }

    #[test]
    fn init_twice_is_harmless() {
        let config = TracingConfig::new();
        config.init();
        config.init();
    }
}
