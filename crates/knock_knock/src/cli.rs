//! Command-line options.

use clap::Parser;
use jester_models::ExecutionSettings;
use knock_knock::telemetry::{TracingConfig, TracingFormat};
use knock_knock::{DEFAULT_SETTINGS_PATH, JOKE_TEMPERATURE, RunOptions};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Tells a knock-knock joke about a random theme.
#[derive(Debug, Parser)]
#[command(name = "knock-knock", version, about)]
pub(crate) struct Cli {
    /// Credentials file: JSON with `apikey`/`orgId`, or a dotenv file.
    #[arg(long, short, env = "JESTER_SETTINGS", default_value = DEFAULT_SETTINGS_PATH)]
    pub settings: PathBuf,

    /// Registered service to use (`gpt3` or `gpt4`). Defaults to `gpt3`.
    #[arg(long)]
    pub service: Option<String>,

    /// Sampling temperature.
    #[arg(long, default_value_t = JOKE_TEMPERATURE)]
    pub temperature: f32,

    /// Maximum number of tokens to generate.
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Log level, or a filter such as `knock_knock=debug,reqwest=warn`.
    #[arg(long, env = "JESTER_LOG", default_value = "warn", value_parser = parse_log_filter)]
    pub log_level: String,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = TracingFormat::Compact)]
    pub log_format: TracingFormat,
}

impl Cli {
    pub(crate) fn tracing(&self) -> TracingConfig {
        let config = TracingConfig::new().with_format(self.log_format);
        match self.log_level.parse::<Level>() {
            Ok(level) => config.with_level(level),
            Err(_) => config.with_env_filter(self.log_level.as_str()),
        }
    }

    pub(crate) fn run_options(&self) -> RunOptions {
        let mut execution = ExecutionSettings::new().with_temperature(self.temperature);
        if let Some(service) = &self.service {
            execution = execution.with_service(service.as_str());
        }
        if let Some(max_tokens) = self.max_tokens {
            execution = execution.with_max_tokens(max_tokens);
        }

        RunOptions {
            settings_path: self.settings.clone(),
            execution,
        }
    }
}

fn parse_log_filter(value: &str) -> Result<String, String> {
    if value.parse::<Level>().is_ok() {
        return Ok(value.to_string());
    }
    EnvFilter::try_new(value)
        .map(|_| value.to_string())
        .map_err(|err| format!("invalid log filter: {err}"))
}
