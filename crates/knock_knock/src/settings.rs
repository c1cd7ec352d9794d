//! Credential loading.

use jester_model_providers::openai::OpenAiCredentials;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default location of the settings file, relative to the working directory.
pub const DEFAULT_SETTINGS_PATH: &str = "config/settings.json";

const JSON_API_KEY: &str = "apikey";
const JSON_ORG_ID: &str = "orgId";
const ENV_API_KEY: &str = "OPENAI_API_KEY";
const ENV_ORG_ID: &str = "OPENAI_ORG_ID";

/// Errors raised while loading credentials.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// The settings file does not exist.
    #[error("configuration not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The settings file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The JSON settings file could not be parsed.
    #[error("malformed JSON in {}: {source}", .path.display())]
    Json {
        /// File that failed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The dotenv settings file could not be parsed.
    #[error("malformed dotenv file {}: {source}", .path.display())]
    Dotenv {
        /// File that failed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: dotenvy::Error,
    },

    /// A required key is absent.
    #[error("{} does not define '{key}'", .path.display())]
    MissingKey {
        /// File that was read.
        path: PathBuf,
        /// The absent key.
        key: &'static str,
    },

    /// A required key is present but blank.
    #[error("'{key}' in {} is empty", .path.display())]
    EmptyValue {
        /// File that was read.
        path: PathBuf,
        /// The blank key.
        key: &'static str,
    },
}

#[derive(Debug, Deserialize)]
struct JsonSettings {
    #[serde(rename = "apikey")]
    api_key: Option<String>,
    #[serde(rename = "orgId")]
    org_id: Option<String>,
}

/// Loader for the local credentials file.
///
/// Two formats are accepted, picked by file extension:
///
/// - `*.json`: an object with `apikey` and `orgId` string fields;
/// - anything else: a dotenv file defining `OPENAI_API_KEY` and `OPENAI_ORG_ID`.
///
/// Both values must be present and non-blank. Reading the file never touches
/// the process environment.
#[derive(Debug, Clone, Copy)]
pub struct Settings;

impl Settings {
    /// Loads credentials from `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the file is missing, unreadable or
    /// malformed, or if either value is absent or blank.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<OpenAiCredentials, ConfigurationError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                ConfigurationError::NotFound(path.to_path_buf())
            } else {
                ConfigurationError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let (api_key, org_id, keys) = if is_json {
            let (api_key, org_id) = parse_json(path, &contents)?;
            (api_key, org_id, (JSON_API_KEY, JSON_ORG_ID))
        } else {
            let (api_key, org_id) = parse_dotenv(path, &contents)?;
            (api_key, org_id, (ENV_API_KEY, ENV_ORG_ID))
        };

        let api_key = require(path, keys.0, api_key)?;
        let org_id = require(path, keys.1, org_id)?;

        tracing::debug!(path = %path.display(), organization = %org_id, "loaded credentials");
        Ok(OpenAiCredentials::new(api_key, org_id))
    }
}

fn parse_json(
    path: &Path,
    contents: &str,
) -> Result<(Option<String>, Option<String>), ConfigurationError> {
    let settings: JsonSettings =
        serde_json::from_str(contents).map_err(|source| ConfigurationError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    Ok((settings.api_key, settings.org_id))
}

fn parse_dotenv(
    path: &Path,
    contents: &str,
) -> Result<(Option<String>, Option<String>), ConfigurationError> {
    let mut api_key = None;
    let mut org_id = None;

    for item in dotenvy::from_read_iter(contents.as_bytes()) {
        let (key, value) = item.map_err(|source| ConfigurationError::Dotenv {
            path: path.to_path_buf(),
            source,
        })?;
        match key.as_str() {
            ENV_API_KEY => api_key = Some(value),
            ENV_ORG_ID => org_id = Some(value),
            _ => {}
        }
    }

    Ok((api_key, org_id))
}

fn require(
    path: &Path,
    key: &'static str,
    value: Option<String>,
) -> Result<String, ConfigurationError> {
    let value = value.ok_or_else(|| ConfigurationError::MissingKey {
        path: path.to_path_buf(),
        key,
    })?;
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigurationError::EmptyValue {
            path: path.to_path_buf(),
            key,
        });
    }
    Ok(value.to_string())
}
