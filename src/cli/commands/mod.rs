//! Command implementation modules
//!
//! This module contains the implementation of each CLI command.
//! Each command is implemented as a separate module for better organization.

pub mod history;
pub mod presets;
pub mod refine;
pub mod settings;

// Re-export command execution functions
pub use history::run_history_command;
pub use presets::run_presets_command;
pub use refine::run_refine_command;
pub use settings::run_settings_command;

use crate::cli::args::ToggleArgs;
use crate::settings::Toggles;

impl ToggleArgs {
    /// Apply explicit flags on top of `base`
    pub fn apply(&self, base: Toggles) -> Toggles {
        Toggles {
            assumptions: self.assumptions.unwrap_or(base.assumptions),
            questions: self.questions.unwrap_or(base.questions),
            acceptance: self.acceptance.unwrap_or(base.acceptance),
        }
    }
}
