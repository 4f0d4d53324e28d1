//! Application configuration
//!
//! Configuration lives in a small TOML file under the platform config
//! directory (or a path passed with `--config`). Every key is optional; a
//! missing file yields [`PromptConfig::default`].
//!
//! ```toml
//! data_dir = "/home/me/.local/share/text-to-prompt"
//! default_mode = "medium"
//! history_limit = 20
//! record_history = true
//! ```

pub mod loader;

pub use loader::{load_config, ConfigLoader};

use crate::error::{ErrorCode, PromptError};
use crate::settings::Mode;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "TEXT_TO_PROMPT_DATA_DIR";

pub const DEFAULT_HISTORY_LIMIT: usize = 20;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "textToPrompt", "text-to-prompt")
}

/// Default location of `config.toml`
pub fn default_config_path() -> Result<PathBuf, PromptError> {
    project_dirs()
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .ok_or_else(|| {
            PromptError::config_with_code(
                ErrorCode::CONFIG_PATH_ERROR,
                "Could not determine home directory",
            )
        })
}

/// Default directory for presets and history
pub fn default_data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".text-to-prompt"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PromptConfig {
    pub data_dir: Option<PathBuf>,
    pub default_mode: Option<Mode>,
    pub history_limit: usize,
    pub record_history: bool,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            default_mode: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
            record_history: true,
        }
    }
}

impl PromptConfig {
    pub fn from_toml(content: &str) -> Result<Self, PromptError> {
        let config: Self = toml::from_str(content).map_err(|e| {
            PromptError::config_with_code(ErrorCode::CONFIG_INVALID_TOML, "Invalid config file")
                .with_source(e)
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), PromptError> {
        if self.history_limit == 0 {
            return Err(PromptError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                "history_limit must be at least 1",
            ));
        }
        Ok(())
    }

    /// Apply environment overrides, looked up through `var`
    pub fn merge_env_vars<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = var(DATA_DIR_ENV).filter(|d| !d.trim().is_empty()) {
            self.data_dir = Some(PathBuf::from(dir));
        }
    }

    pub fn effective_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    pub fn effective_mode(&self) -> Mode {
        self.default_mode.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PromptConfig::default();
        assert_eq!(config.history_limit, 20);
        assert!(config.record_history);
        assert_eq!(config.effective_mode(), Mode::Easy);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = PromptConfig::from_toml("default_mode = \"hard\"\n").unwrap();
        assert_eq!(config.default_mode, Some(Mode::Hard));
        assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = PromptConfig::from_toml("default_mode = \"loud\"").unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_TOML);

        let err = PromptConfig::from_toml("history_limit = 0").unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_VALUE);
    }

    #[test]
    fn test_env_override() {
        let mut config = PromptConfig::default();
        config.merge_env_vars(|key| (key == DATA_DIR_ENV).then(|| "/tmp/prompts".to_string()));
        assert_eq!(config.effective_data_dir(), PathBuf::from("/tmp/prompts"));

        let mut config = PromptConfig::default();
        config.merge_env_vars(|_| Some("  ".to_string()));
        assert_eq!(config.data_dir, None);
    }
}
