//! CLI argument structures
//!
//! This module defines all command-line interface structures used by
//! text-to-prompt. It includes the main CLI structure and all subcommand
//! definitions.

use crate::settings::Mode;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Turn free-form notes into structured Markdown prompts
#[derive(Parser)]
#[command(name = "text-to-prompt")]
#[command(about = "text-to-prompt - Turn free-form notes into structured Markdown prompts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(
        short = 'c',
        long,
        global = true,
        value_name = "PATH",
        env = "TEXT_TO_PROMPT_CONFIG"
    )]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Refine text into a prompt and a discovery/plan/execution prompt pack
    #[command(name = "refine")]
    Refine(RefineArgs),

    /// Manage saved settings presets
    #[command(name = "presets")]
    Presets {
        #[command(subcommand)]
        command: PresetCommands,
    },

    /// Inspect or clear refinement history
    #[command(name = "history")]
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },

    /// Show settings defaults
    #[command(name = "settings")]
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

/// Overrides for the optional prompt sections
#[derive(Args, Debug, Clone, Default)]
pub struct ToggleArgs {
    /// Include the Assumptions section
    #[arg(long, value_name = "BOOL")]
    pub assumptions: Option<bool>,

    /// Include the Clarifying Questions section
    #[arg(long, value_name = "BOOL")]
    pub questions: Option<bool>,

    /// Include the Acceptance Criteria section
    #[arg(long, value_name = "BOOL")]
    pub acceptance: Option<bool>,
}

#[derive(Args, Debug, Clone)]
pub struct RefineArgs {
    /// Text to refine (reads --file or stdin when omitted)
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short = 'f', long, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Prompt mode: easy, medium, or hard
    #[arg(short = 'm', long)]
    pub mode: Option<Mode>,

    /// Start from a saved preset (id or name)
    #[arg(short = 'p', long, value_name = "PRESET")]
    pub preset: Option<String>,

    #[command(flatten)]
    pub toggles: ToggleArgs,

    /// Which document to print
    #[arg(short = 'o', long, value_enum, default_value_t = OutputChoice::Single)]
    pub output: OutputChoice,

    /// Print a JSON object instead of Markdown
    #[arg(long)]
    pub json: bool,

    /// Do not record this refinement in history
    #[arg(long)]
    pub no_history: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputChoice {
    Single,
    Pack,
    Both,
}

#[derive(Subcommand)]
pub enum PresetCommands {
    /// List saved presets
    List,
    /// Save a preset from a mode and toggle overrides
    Save {
        /// Preset name
        name: String,

        /// Prompt mode for the preset (defaults to the configured mode)
        #[arg(short = 'm', long)]
        mode: Option<Mode>,

        #[command(flatten)]
        toggles: ToggleArgs,
    },
    /// Delete a preset by id
    Delete {
        /// Preset id
        id: String,
    },
    /// Export presets as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Import presets from an exported JSON file
    Import {
        /// File to import
        path: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List recent refinements, newest first
    List {
        /// Maximum number of entries to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Print the output of a history entry
    Show {
        /// Position in the list, starting at 1
        index: usize,

        /// Print the prompt pack instead of the single prompt
        #[arg(long)]
        pack: bool,
    },
    /// Remove all history entries
    Clear,
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Print the default settings for a mode as JSON
    Defaults {
        /// Mode to show (defaults to the configured mode)
        mode: Option<Mode>,
    },
}
