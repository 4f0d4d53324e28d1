//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use crate::app::AppContext;
use crate::cli::args::Commands;
use crate::cli::commands::*;
use anyhow::Result;

/// Execute a CLI command based on the parsed arguments
pub async fn execute_command(command: Commands, app: &AppContext) -> Result<()> {
    match command {
        Commands::Refine(args) => run_refine_command(args, app).await,
        Commands::Presets { command } => run_presets_command(command, app).await,
        Commands::History { command } => run_history_command(command, app).await,
        Commands::Settings { command } => run_settings_command(command, app),
    }
}
