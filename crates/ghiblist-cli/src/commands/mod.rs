pub mod config;
pub mod fetch;
pub mod list;
pub mod loading_ui;
pub mod prompts;
pub mod show;

use color_eyre::Result;
use film_config::{Config, PathManager};
use std::path::PathBuf;

/// Where the effective endpoint came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointSource {
    Flag,
    ConfigFile,
    Default,
}

impl EndpointSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointSource::Flag => "--endpoint flag",
            EndpointSource::ConfigFile => "config file",
            EndpointSource::Default => "built-in default",
        }
    }
}

/// Effective settings for one invocation: `--endpoint` > config file > default
pub struct Settings {
    pub config: Config,
    pub config_file: PathBuf,
    pub endpoint: String,
    pub endpoint_source: EndpointSource,
    pub retry_prompt: bool,
}

impl Settings {
    pub fn resolve(config_file: Option<PathBuf>, endpoint: Option<String>, no_retry: bool) -> Result<Self> {
        let config_file = config_file.unwrap_or_else(|| PathManager::default().config_file());
        let config = Config::load_or_default(&config_file)
            .map_err(|e| color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e))?;

        if let Err(e) = config.validate() {
            tracing::warn!(config_file = %config_file.display(), "Invalid configuration: {}", e);
        }

        let from_file = config_file.exists();
        Ok(Self::from_parts(config, config_file, from_file, endpoint, no_retry))
    }

    /// Settings from defaults and flags alone, ignoring whatever is on disk
    pub fn without_file(config_file: Option<PathBuf>, endpoint: Option<String>, no_retry: bool) -> Self {
        let config_file = config_file.unwrap_or_else(|| PathManager::default().config_file());
        Self::from_parts(Config::default(), config_file, false, endpoint, no_retry)
    }

    pub fn from_parts(
        config: Config,
        config_file: PathBuf,
        from_file: bool,
        endpoint: Option<String>,
        no_retry: bool,
    ) -> Self {
        let (endpoint, endpoint_source) = match endpoint {
            Some(endpoint) => (endpoint, EndpointSource::Flag),
            None if from_file && !config.is_default_endpoint() => (config.endpoint.clone(), EndpointSource::ConfigFile),
            None => (config.endpoint.clone(), EndpointSource::Default),
        };

        let retry_prompt = config.retry_prompt && !no_retry;

        Self {
            config,
            config_file,
            endpoint,
            endpoint_source,
            retry_prompt,
        }
    }
}
