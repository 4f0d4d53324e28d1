//! Refinement settings
//!
//! The pipeline consumes a fully resolved [`Settings`] value. This module owns
//! the closed enums ([`Mode`], [`OutputTab`]), the toggle record, and the
//! per-mode defaults that callers start from before applying overrides.

pub mod sanitize;

pub use sanitize::sanitize_settings;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Verbosity and strictness of the rendered prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Easy, Mode::Medium, Mode::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Easy => "easy",
            Mode::Medium => "medium",
            Mode::Hard => "hard",
        }
    }

    /// Toggle values a mode starts with when the user switches to it
    pub fn default_toggles(&self) -> Toggles {
        match self {
            Mode::Easy => Toggles {
                assumptions: false,
                questions: false,
                acceptance: false,
            },
            Mode::Medium => Toggles {
                assumptions: true,
                questions: true,
                acceptance: false,
            },
            Mode::Hard => Toggles::all(true),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Mode::Easy),
            "medium" => Ok(Mode::Medium),
            "hard" => Ok(Mode::Hard),
            other => Err(format!(
                "unknown mode '{}', expected one of: easy, medium, hard",
                other
            )),
        }
    }
}

/// Which rendered document the caller is currently showing.
///
/// Carried through [`Settings`] for the caller's benefit; rendering ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTab {
    #[default]
    Single,
    Pack,
}

impl OutputTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputTab::Single => "single",
            OutputTab::Pack => "pack",
        }
    }
}

impl FromStr for OutputTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(OutputTab::Single),
            "pack" => Ok(OutputTab::Pack),
            other => Err(format!(
                "unknown output tab '{}', expected single or pack",
                other
            )),
        }
    }
}

/// Independent switches for the optional prompt sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Toggles {
    pub assumptions: bool,
    pub questions: bool,
    pub acceptance: bool,
}

impl Toggles {
    pub fn all(enabled: bool) -> Self {
        Self {
            assumptions: enabled,
            questions: enabled,
            acceptance: enabled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub mode: Mode,
    pub toggles: Toggles,
    pub output_tab: OutputTab,
}

impl Settings {
    /// Settings with the given mode and that mode's default toggles
    pub fn for_mode(mode: Mode) -> Self {
        Self {
            mode,
            toggles: mode.default_toggles(),
            output_tab: OutputTab::default(),
        }
    }

    /// Switch mode, resetting toggles to the new mode's defaults
    pub fn with_mode(self, mode: Mode) -> Self {
        Self {
            mode,
            toggles: mode.default_toggles(),
            ..self
        }
    }

    pub fn with_toggles(mut self, toggles: Toggles) -> Self {
        self.toggles = toggles;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::for_mode(Mode::default())
    }
}
