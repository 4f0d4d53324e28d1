//! Runtime initialization and setup
//!
//! Loads configuration and opens the preset and history stores the
//! commands work against.

use crate::app::{config::AppConfig, logging::init_logging};
use crate::config::{load_config, PromptConfig};
use crate::storage::{HistoryStore, JsonStore, PresetStore};
use anyhow::{Context, Result};
use tracing::debug;

/// Everything a command needs after startup
pub struct AppContext {
    pub config: PromptConfig,
    pub presets: PresetStore,
    pub history: HistoryStore,
}

impl AppContext {
    pub fn from_config(config: PromptConfig) -> Self {
        let store = JsonStore::new(config.effective_data_dir());
        Self {
            presets: PresetStore::new(store.clone()),
            history: HistoryStore::new(store).with_limit(config.history_limit),
            config,
        }
    }
}

/// Initialize logging, then load configuration and open storage
pub async fn initialize_app(app_config: &AppConfig) -> Result<AppContext> {
    init_logging(app_config);

    let config = load_config(app_config.config_path.as_deref())
        .await
        .context("Failed to load configuration")?;
    debug!(
        "Using data directory {}",
        config.effective_data_dir().display()
    );

    Ok(AppContext::from_config(config))
}
