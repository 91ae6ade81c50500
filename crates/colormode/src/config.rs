//! Controller configuration.

use crate::store::DEFAULT_STORAGE_KEY;

/// Settings shared by theme controllers.
///
/// # Example
///
/// ```rust
/// use colormode::Config;
///
/// let config = Config::new().storage_key("site-theme");
/// assert_eq!(config.key(), "site-theme");
/// assert_eq!(Config::default().key(), "color-theme");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    storage_key: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    /// Sets the key the preference is stored under.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.storage_key
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
