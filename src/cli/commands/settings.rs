//! `settings` command

use crate::app::AppContext;
use crate::cli::args::SettingsCommands;
use crate::settings::Settings;
use anyhow::{Context, Result};

pub fn run_settings_command(command: SettingsCommands, app: &AppContext) -> Result<()> {
    match command {
        SettingsCommands::Defaults { mode } => {
            let mode = mode.unwrap_or_else(|| app.config.effective_mode());
            let json = serde_json::to_string_pretty(&Settings::for_mode(mode))
                .context("Failed to serialize settings")?;
            println!("{}", json);
        }
    }
    Ok(())
}
