//! Rule-based refinement pipeline
//!
//! Everything here is pure and synchronous: no I/O, no shared state, and the
//! same `(input, settings)` always renders byte-identical output.
//!
//! - `parse` - normalization plus constraint and deliverable extraction
//! - `templates` - per-mode Markdown assembly for single prompts and packs
//! - `guardrails` - closing block appended to every prompt
//! - `refine` - the `refine(input, settings)` entry point

pub mod guardrails;
pub mod parse;
pub mod refine;
pub mod templates;

pub use guardrails::render_guardrails;
pub use parse::{extract_constraints, extract_deliverables, normalize_text, split_lines};
pub use refine::{build_context, refine, RefinementResult};
pub use templates::{build_prompt_pack, build_single_prompt, PromptVariant, RefinementContext};
