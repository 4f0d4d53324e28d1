//! `refine` command: read text, resolve settings, print prompts

use crate::app::AppContext;
use crate::cli::args::{OutputChoice, RefineArgs, ToggleArgs};
use crate::engine::{refine, RefinementResult};
use crate::error::{ErrorCode, PromptError};
use crate::settings::{Mode, OutputTab, Settings};
use crate::storage::{HistoryEntry, Preset};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::IsTerminal;
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::{debug, info, warn};

/// Printed between the single prompt and the pack with `--output both`
const BOTH_SEPARATOR: &str = "\n\n===\n\n";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    settings: &'a Settings,
    #[serde(skip_serializing_if = "Option::is_none")]
    single: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pack: Option<&'a str>,
}

pub async fn run_refine_command(args: RefineArgs, app: &AppContext) -> Result<()> {
    let input = read_input(args.text.as_deref(), args.file.as_deref()).await?;
    validate_input(&input)?;

    let preset = match args.preset.as_deref() {
        Some(key) => Some(app.presets.find(key).await.ok_or_else(|| {
            PromptError::validation_with_code(
                ErrorCode::VALIDATION_INVALID_ARGUMENT,
                format!("no preset with id or name '{}'", key),
                Some("preset".to_string()),
            )
        })?),
        None => None,
    };

    let mut settings = resolve_settings(
        preset.as_ref(),
        args.mode,
        app.config.effective_mode(),
        &args.toggles,
    );
    settings.output_tab = match args.output {
        OutputChoice::Pack => OutputTab::Pack,
        OutputChoice::Single | OutputChoice::Both => OutputTab::Single,
    };
    debug!("Resolved settings: {:?}", settings);

    let result = refine(&input, &settings);
    println!("{}", render_output(&result, &settings, args.output, args.json)?);

    if app.config.record_history && !args.no_history {
        let entry = HistoryEntry::new(input, settings, &result);
        if let Err(e) = app.history.add(entry).await {
            warn!("Could not record history: {}", e);
        }
    }

    info!("Refined input in {} mode", settings.mode);
    Ok(())
}

/// Text from the argument, the file, or piped stdin, in that order
async fn read_input(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    if let Some(path) = file {
        return tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read input file {}", path.display()));
    }

    if std::io::stdin().is_terminal() {
        return Err(PromptError::validation_with_code(
            ErrorCode::VALIDATION_EMPTY_INPUT,
            "no input given; pass TEXT, --file, or pipe text on stdin",
            Some("input".to_string()),
        )
        .into());
    }
    let mut buffer = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buffer)
        .await
        .map_err(|e| PromptError::other("Failed to read standard input").with_source(e))?;
    Ok(buffer)
}

fn validate_input(input: &str) -> Result<(), PromptError> {
    if input.trim().is_empty() {
        return Err(PromptError::validation_with_code(
            ErrorCode::VALIDATION_EMPTY_INPUT,
            "Please enter some text to refine.",
            Some("input".to_string()),
        ));
    }
    Ok(())
}

/// Settings for a refinement.
///
/// Starts from the preset, or the configured mode's defaults. An explicit
/// mode resets toggles to that mode's defaults; explicit toggle flags win.
pub fn resolve_settings(
    preset: Option<&Preset>,
    mode: Option<Mode>,
    configured_mode: Mode,
    toggles: &ToggleArgs,
) -> Settings {
    let base = preset
        .map(|p| p.settings)
        .unwrap_or_else(|| Settings::for_mode(configured_mode));
    let base = match mode {
        Some(mode) if mode != base.mode => base.with_mode(mode),
        _ => base,
    };
    base.with_toggles(toggles.apply(base.toggles))
}

fn render_output(
    result: &RefinementResult,
    settings: &Settings,
    choice: OutputChoice,
    json: bool,
) -> Result<String> {
    let (single, pack) = match choice {
        OutputChoice::Single => (Some(result.single.as_str()), None),
        OutputChoice::Pack => (None, Some(result.pack.as_str())),
        OutputChoice::Both => (Some(result.single.as_str()), Some(result.pack.as_str())),
    };

    if json {
        let output = JsonOutput {
            settings,
            single,
            pack,
        };
        return serde_json::to_string_pretty(&output).context("Failed to serialize output");
    }

    Ok(match (single, pack) {
        (Some(single), Some(pack)) => format!("{}{}{}", single, BOTH_SEPARATOR, pack),
        (Some(doc), None) | (None, Some(doc)) => doc.to_string(),
        (None, None) => String::new(),
    })
}
