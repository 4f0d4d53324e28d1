//! `history` command: list, show, clear

use crate::app::AppContext;
use crate::cli::args::HistoryCommands;
use crate::error::{ErrorCode, PromptError};
use crate::storage::HistoryEntry;
use anyhow::Result;

const PREVIEW_CHARS: usize = 60;

pub async fn run_history_command(command: HistoryCommands, app: &AppContext) -> Result<()> {
    match command {
        HistoryCommands::List { limit } => {
            let history = app.history.load().await;
            if history.is_empty() {
                println!("No history yet.");
            }
            let shown = limit.unwrap_or(history.len());
            for (i, entry) in history.iter().take(shown).enumerate() {
                println!("{}", format_history_line(i + 1, entry));
            }
        }
        HistoryCommands::Show { index, pack } => {
            let history = app.history.load().await;
            let entry = index
                .checked_sub(1)
                .and_then(|i| history.get(i))
                .ok_or_else(|| {
                    PromptError::validation_with_code(
                        ErrorCode::VALIDATION_OUT_OF_RANGE,
                        format!("no history entry {} ({} recorded)", index, history.len()),
                        Some("index".to_string()),
                    )
                })?;
            if pack {
                println!("{}", entry.output_pack);
            } else {
                println!("{}", entry.output);
            }
        }
        HistoryCommands::Clear => {
            app.history.clear().await?;
            println!("History cleared.");
        }
    }
    Ok(())
}

/// First line of the input, shortened for one-line listings
fn preview(input: &str) -> String {
    let first = input.trim().lines().next().unwrap_or("");
    if first.chars().count() > PREVIEW_CHARS {
        let cut: String = first.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", cut)
    } else {
        first.to_string()
    }
}

fn format_history_line(position: usize, entry: &HistoryEntry) -> String {
    format!(
        "{:>2}. {}  [{}]  {}",
        position,
        entry.timestamp,
        entry.settings.mode,
        preview(&entry.input)
    )
}
