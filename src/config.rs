use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::error::ErrorVerbosity;

/// Configuration for the API key extractors.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiKeyConfig {
    /// How much detail a rejection exposes. Defaults to [`ErrorVerbosity::Full`].
    #[serde(default = "default_error_verbosity")]
    pub error_verbosity: ErrorVerbosity,
}

fn default_error_verbosity() -> ErrorVerbosity {
    ErrorVerbosity::Full
}

impl Default for ApiKeyConfig {
    fn default() -> Self {
        Self::new(default_error_verbosity())
    }
}

impl ApiKeyConfig {
    pub fn new(error_verbosity: ErrorVerbosity) -> Self {
        Self { error_verbosity }
    }

    pub async fn from_config_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        tracing::debug!(path = %path.display(), "Loading config");

        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse config")
    }
}
