use super::{default_config_path, PromptConfig};
use crate::error::{ErrorCode, ErrorExt, PromptError};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Resolves where configuration comes from and loads it
pub struct ConfigLoader {
    path: PathBuf,
    explicit: bool,
}

impl ConfigLoader {
    /// Loader for the platform default location
    pub fn new() -> Result<Self, PromptError> {
        Ok(Self {
            path: default_config_path()?,
            explicit: false,
        })
    }

    /// Loader for a path given by the user; the file must exist
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            explicit: true,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<PromptConfig, PromptError> {
        let mut config = if fs::try_exists(&self.path).await.unwrap_or(false) {
            debug!("Loading configuration from {}", self.path.display());
            let content = fs::read_to_string(&self.path)
                .await
                .to_config_error(format!(
                    "Failed to read config file: {}",
                    self.path.display()
                ))?;
            PromptConfig::from_toml(&content)
                .map_err(|e| e.with_context(self.path.display()))?
        } else if self.explicit {
            return Err(PromptError::config_with_code(
                ErrorCode::CONFIG_NOT_FOUND,
                format!("Configuration file not found: {}", self.path.display()),
            ));
        } else {
            debug!(
                "No configuration at {}, using defaults",
                self.path.display()
            );
            PromptConfig::default()
        };

        config.merge_env_vars(|key| std::env::var(key).ok());
        Ok(config)
    }
}

/// Load configuration from `path`, or the default location when `None`
pub async fn load_config(path: Option<&Path>) -> Result<PromptConfig, PromptError> {
    let loader = match path {
        Some(p) => ConfigLoader::with_path(p),
        None => ConfigLoader::new()?,
    };
    debug!("Resolved configuration path {}", loader.path().display());
    loader.load().await
}
