//! Refinement entry point: normalize, extract, render

use super::parse::{extract_constraints, extract_deliverables, normalize_text, split_lines};
use super::templates::{build_prompt_pack, build_single_prompt, RefinementContext};
use crate::settings::Settings;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// The two documents produced for one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinementResult {
    pub single: String,
    pub pack: String,
}

/// Build the refinement context for `input` without rendering it
pub fn build_context(input: &str, settings: &Settings) -> RefinementContext {
    let normalized_input = normalize_text(input);
    let constraints = extract_constraints(&split_lines(&normalized_input));
    let deliverables = extract_deliverables(&normalized_input);

    RefinementContext {
        normalized_input,
        constraints,
        deliverables,
        settings: *settings,
    }
}

/// Turn free-form text into a refined prompt and a three-stage prompt pack.
///
/// Never fails: empty or whitespace-only input renders placeholder text.
/// The output depends only on `input`, `settings.mode` and `settings.toggles`.
pub fn refine(input: &str, settings: &Settings) -> RefinementResult {
    let context = build_context(input, settings);
    debug!(
        mode = %context.settings.mode,
        constraints = context.constraints.len(),
        deliverables = context.deliverables.len(),
        "Refining input"
    );
    trace!("Deliverables detected: {:?}", context.deliverables);

    RefinementResult {
        single: build_single_prompt(&context),
        pack: build_prompt_pack(&context),
    }
}
