use serde::{Deserialize, Serialize};
use std::path::Path;

/// Studio Ghibli films listing
/// Docs: https://ghibliapi.vercel.app/#tag/Films
pub const DEFAULT_ENDPOINT: &str = "https://ghibliapi.vercel.app/films";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// URL the film collection is fetched from.
    /// Not parsed here: a malformed value surfaces as a configuration error
    /// on the first fetch.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Offer a retry prompt after a failed fetch (interactive terminals only)
    #[serde(default = "default_true")]
    pub retry_prompt: bool,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            retry_prompt: default_true(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(anyhow::anyhow!("endpoint is required and cannot be empty"));
        }
        Ok(())
    }

    pub fn is_default_endpoint(&self) -> bool {
        self.endpoint == DEFAULT_ENDPOINT
    }
}
