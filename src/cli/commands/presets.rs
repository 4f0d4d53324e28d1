//! `presets` command: list, save, delete, export, import

use crate::app::AppContext;
use crate::cli::args::PresetCommands;
use crate::settings::{Settings, Toggles};
use crate::storage::Preset;
use anyhow::{Context, Result};

pub async fn run_presets_command(command: PresetCommands, app: &AppContext) -> Result<()> {
    match command {
        PresetCommands::List => {
            let presets = app.presets.load().await;
            if presets.is_empty() {
                println!("No presets saved.");
            } else {
                for preset in &presets {
                    println!("{}", format_preset_line(preset));
                }
            }
        }
        PresetCommands::Save {
            name,
            mode,
            toggles,
        } => {
            let base = Settings::for_mode(mode.unwrap_or_else(|| app.config.effective_mode()));
            let settings = base.with_toggles(toggles.apply(base.toggles));
            let presets = app.presets.save(&name, settings).await?;
            if let Some(saved) = presets.last() {
                println!("Saved preset '{}' ({})", saved.name, saved.id);
            }
        }
        PresetCommands::Delete { id } => {
            let before = app.presets.load().await.len();
            let after = app.presets.delete(&id).await?.len();
            if after < before {
                println!("Deleted preset {}", id);
            } else {
                println!("No preset with id {}", id);
            }
        }
        PresetCommands::Export { out } => {
            let json = app.presets.export().await?;
            match out {
                Some(path) => {
                    tokio::fs::write(&path, json)
                        .await
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Exported presets to {}", path.display());
                }
                None => println!("{}", json),
            }
        }
        PresetCommands::Import { path } => {
            let json = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let before = app.presets.load().await.len();
            let after = app.presets.import(&json).await?.len();
            println!("Imported {} preset(s)", after.saturating_sub(before));
        }
    }
    Ok(())
}

fn format_toggles(toggles: &Toggles) -> String {
    let enabled: Vec<&str> = [
        ("assumptions", toggles.assumptions),
        ("questions", toggles.questions),
        ("acceptance", toggles.acceptance),
    ]
    .iter()
    .filter(|(_, on)| *on)
    .map(|(name, _)| *name)
    .collect();

    if enabled.is_empty() {
        "none".to_string()
    } else {
        enabled.join(", ")
    }
}

fn format_preset_line(preset: &Preset) -> String {
    format!(
        "{}  {}  mode={}  sections={}",
        preset.id,
        preset.name,
        preset.settings.mode,
        format_toggles(&preset.settings.toggles)
    )
}
