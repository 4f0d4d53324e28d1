//! # text-to-prompt
//!
//! Turns free-form user text into structured Markdown prompts: a single
//! refined prompt, or a three-stage pack of discovery, plan and execution
//! prompts.
//!
//! ## Usage
//!
//! ```
//! use text_to_prompt::engine::refine;
//! use text_to_prompt::settings::{Mode, Settings};
//!
//! let result = refine("Build a checklist. Must include timelines.", &Settings::for_mode(Mode::Hard));
//! assert!(result.single.contains("## Two-Step Chain"));
//! assert!(result.pack.contains("# Execution Prompt"));
//! ```
//!
//! ## Modules
//!
//! - `engine` - The pure refinement pipeline (normalize, extract, render)
//! - `settings` - Modes, toggles and per-mode defaults
//! - `storage` - JSON persistence for presets and history
//! - `config` - TOML configuration loading
//! - `error` - Application error type with numeric codes
//! - `app` - Logging, startup and fatal error handling for the binary
//! - `cli` - Command-line argument structures and command handlers
pub mod app;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod settings;
pub mod storage;

pub use engine::{refine, RefinementResult};
pub use settings::{Mode, OutputTab, Settings, Toggles};
