//! Theme selection.

use async_trait::async_trait;
use rand::seq::SliceRandom;

/// Themes used by [`ShowManager::new`].
pub const DEFAULT_THEMES: &[&str] = &["boo", "dishes", "art", "needle", "tank", "police"];

/// Errors raised by a [`ThemeSource`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PluginError {
    /// The source has nothing to choose from.
    #[error("no themes available")]
    NoThemes,
    /// The source failed for another reason.
    #[error("theme source failed: {0}")]
    Failed(String),
}

/// Something that can come up with a joke theme.
#[async_trait]
pub trait ThemeSource: Send + Sync {
    /// Returns a theme. Successive calls may return different values.
    async fn random_theme(&self) -> Result<String, PluginError>;
}

/// Picks a theme uniformly at random from a fixed list.
#[derive(Debug, Clone)]
pub struct ShowManager {
    themes: Vec<String>,
}

impl Default for ShowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowManager {
    /// Creates a manager over [`DEFAULT_THEMES`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_themes(DEFAULT_THEMES.iter().copied())
    }

    /// Creates a manager over a custom list.
    #[must_use]
    pub fn with_themes<I, S>(themes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            themes: themes.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the candidate themes.
    #[must_use]
    pub fn themes(&self) -> &[String] {
        &self.themes
    }
}

#[async_trait]
impl ThemeSource for ShowManager {
    async fn random_theme(&self) -> Result<String, PluginError> {
        let theme = self
            .themes
            .choose(&mut rand::thread_rng())
            .ok_or(PluginError::NoThemes)?;
        tracing::debug!(theme = %theme, "picked theme");
        Ok(theme.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_theme_comes_from_list() {
        let manager = ShowManager::new();
        for _ in 0..20 {
            let theme = manager.random_theme().await.unwrap();
            assert!(DEFAULT_THEMES.contains(&theme.as_str()), "{theme}");
        }
    }

    #[tokio::test]
    async fn single_theme_is_always_picked() {
        let manager = ShowManager::with_themes(["Snoop Dogg"]);
        assert_eq!(manager.random_theme().await.unwrap(), "Snoop Dogg");
    }

    #[tokio::test]
    async fn empty_list_is_an_error() {
        let manager = ShowManager::with_themes(Vec::<String>::new());
        assert_eq!(manager.random_theme().await, Err(PluginError::NoThemes));
    }
}
