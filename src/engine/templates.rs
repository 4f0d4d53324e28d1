//! Mode-driven Markdown prompt assembly
//!
//! A prompt is an ordered list of sections joined by a blank line. The
//! section set depends on the [`Mode`]; the heading and the optional focus
//! section depend on the [`PromptVariant`]. Toggle-gated sections are
//! scaffolding for the reader to fill in, not computed content.

use super::guardrails::render_guardrails;
use super::parse::split_bullet;
use crate::settings::{Mode, Settings};
use std::collections::HashSet;

const SECTION_SEPARATOR: &str = "\n\n";
const PACK_SEPARATOR: &str = "\n\n---\n\n";
const NO_INPUT: &str = "(No input provided.)";
const NONE_PROVIDED: &str = "None provided.";

/// Everything a render needs, computed once per refinement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefinementContext {
    pub normalized_input: String,
    pub constraints: Vec<String>,
    pub deliverables: Vec<String>,
    pub settings: Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptVariant {
    Single,
    Discovery,
    Plan,
    Execution,
}

impl PromptVariant {
    /// Variants that make up a prompt pack, in render order
    pub const PACK: [PromptVariant; 3] = [
        PromptVariant::Discovery,
        PromptVariant::Plan,
        PromptVariant::Execution,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            PromptVariant::Single => "# Refined Prompt",
            PromptVariant::Discovery => "# Discovery Prompt",
            PromptVariant::Plan => "# Plan Prompt",
            PromptVariant::Execution => "# Execution Prompt",
        }
    }

    pub fn focus(&self) -> Option<&'static str> {
        match self {
            PromptVariant::Single => None,
            PromptVariant::Discovery => Some("Surface missing details, unknowns, and constraints."),
            PromptVariant::Plan => Some("Provide a clear, ordered plan only."),
            PromptVariant::Execution => Some("Execute the plan and verify the outcome."),
        }
    }
}

fn strip_bullet(value: &str) -> &str {
    match split_bullet(value) {
        Some((_, content)) => content.trim(),
        None => value.trim(),
    }
}

/// Render items as `- item` lines, or a single placeholder bullet when empty
fn render_list<S: AsRef<str>>(items: &[S], empty_label: &str) -> String {
    if items.is_empty() {
        return format!("- {}", empty_label);
    }
    items
        .iter()
        .map(|item| format!("- {}", strip_bullet(item.as_ref())))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_block(text: &str) -> &str {
    if text.trim().is_empty() {
        NO_INPUT
    } else {
        text
    }
}

/// One sentence naming the requested output types, each listed once
fn render_deliverables(deliverables: &[String]) -> String {
    if deliverables.is_empty() {
        return "Use a clear, structured Markdown response.".to_string();
    }
    let mut seen = HashSet::new();
    let unique: Vec<&str> = deliverables
        .iter()
        .map(String::as_str)
        .filter(|item| seen.insert(*item))
        .collect();
    format!("Provide the output as: {}.", unique.join(", "))
}

/// One definition per deliverable entry.
///
/// Unlike [`render_deliverables`] this does not dedupe; the extractor
/// already yields each keyword at most once.
fn render_definitions(deliverables: &[String]) -> String {
    if deliverables.is_empty() {
        return "- None specified.".to_string();
    }
    deliverables
        .iter()
        .map(|item| format!("- {}: deliver in a clean, skimmable format.", item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_questions(defaults: &[&str], enabled: bool) -> Option<String> {
    enabled.then(|| {
        format!(
            "## Clarifying Questions\n{}",
            render_list(defaults, "No questions yet.")
        )
    })
}

fn render_assumptions(enabled: bool) -> Option<String> {
    enabled.then(|| {
        format!(
            "## Assumptions\n{}",
            render_list::<&str>(&[], "State assumptions if needed.")
        )
    })
}

fn render_acceptance(enabled: bool) -> Option<String> {
    enabled.then(|| {
        format!(
            "## Acceptance Criteria\n{}",
            render_list::<&str>(&[], "Define acceptance criteria if required.")
        )
    })
}

fn render_output_rules(deliverables: &[String]) -> String {
    let rules = [
        render_deliverables(deliverables),
        "Use concise bullet points where possible.".to_string(),
        "Keep sections clearly labeled.".to_string(),
        "Avoid unnecessary filler.".to_string(),
    ];
    format!("## Output Format Rules\n{}", render_list(&rules[..], NONE_PROVIDED))
}

fn render_two_step_chain() -> String {
    [
        "## Two-Step Chain",
        "1. Plan only: propose the plan without executing.",
        "2. Execute and verify: follow the plan and confirm results against constraints.",
    ]
    .join("\n")
}

fn canned_questions(mode: Mode) -> [&'static str; 2] {
    match mode {
        Mode::Easy => [
            "What is the target audience?",
            "What level of detail is expected?",
        ],
        Mode::Medium => [
            "What is the intended audience or user?",
            "Are there any format or length preferences?",
        ],
        Mode::Hard => [
            "What is the success criteria for this output?",
            "Are there any required formats or templates?",
        ],
    }
}

/// Accumulates sections for one rendered prompt
struct PromptBuilder<'a> {
    context: &'a RefinementContext,
    sections: Vec<String>,
}

impl<'a> PromptBuilder<'a> {
    fn new(context: &'a RefinementContext, variant: PromptVariant) -> Self {
        let mut builder = Self {
            context,
            sections: vec![
                variant.heading().to_string(),
                format!("Mode: {}", context.settings.mode),
            ],
        };
        if let Some(focus) = variant.focus() {
            builder.push(format!("## Focus\n{}", focus));
        }
        builder
    }

    fn push(&mut self, section: impl Into<String>) -> &mut Self {
        self.sections.push(section.into());
        self
    }

    fn push_optional(&mut self, section: Option<String>) -> &mut Self {
        if let Some(section) = section {
            self.sections.push(section);
        }
        self
    }

    /// Assumptions, clarifying questions and acceptance criteria, as toggled
    fn push_toggled_sections(&mut self) -> &mut Self {
        let toggles = self.context.settings.toggles;
        let questions = canned_questions(self.context.settings.mode);
        self.push_optional(render_assumptions(toggles.assumptions))
            .push_optional(render_questions(&questions, toggles.questions))
            .push_optional(render_acceptance(toggles.acceptance))
    }

    fn finish(self) -> String {
        self.sections.join(SECTION_SEPARATOR)
    }
}

fn build_easy(context: &RefinementContext, variant: PromptVariant) -> String {
    let mut prompt = PromptBuilder::new(context, variant);
    prompt
        .push("## Goal")
        .push("Summarize the user intent and deliver a structured response.")
        .push("## Context")
        .push(render_block(&context.normalized_input))
        .push("## Input")
        .push(render_block(&context.normalized_input))
        .push("## Requested Output Format")
        .push(render_deliverables(&context.deliverables))
        .push("## Constraints")
        .push(render_list(&context.constraints[..], NONE_PROVIDED))
        .push_toggled_sections()
        .push(render_output_rules(&context.deliverables))
        .push(render_guardrails());
    prompt.finish()
}

fn build_medium(context: &RefinementContext, variant: PromptVariant) -> String {
    let mut prompt = PromptBuilder::new(context, variant);
    prompt
        .push("## Role")
        .push("You are a structured, detail-oriented assistant.")
        .push("## Goal")
        .push("Deliver a complete and well-organized response based on the input.")
        .push("## Context")
        .push(render_block(&context.normalized_input))
        .push("## Constraints")
        .push(render_list(&context.constraints[..], NONE_PROVIDED))
        .push_toggled_sections()
        .push(render_output_rules(&context.deliverables))
        .push(render_guardrails());
    prompt.finish()
}

fn build_hard(context: &RefinementContext, variant: PromptVariant) -> String {
    let mut prompt = PromptBuilder::new(context, variant);
    prompt
        .push("## Role")
        .push("You are an expert, methodical assistant that prioritizes correctness.")
        .push("## Definitions")
        .push(render_definitions(&context.deliverables))
        .push("## Goal")
        .push("Deliver the requested output with maximum clarity and compliance.")
        .push("## Non Goals")
        .push(render_list(
            &["Anything not explicitly requested.", "Unverified assumptions."][..],
            "None.",
        ))
        .push("## Constraints")
        .push(render_list(&context.constraints[..], NONE_PROVIDED))
        .push_toggled_sections()
        .push("## Validation Checklist")
        .push(render_list(
            &[
                "All constraints satisfied.",
                "Assumptions are explicit.",
                "Open questions are listed if needed.",
                "Output format rules followed.",
            ][..],
            NONE_PROVIDED,
        ))
        .push(render_output_rules(&context.deliverables))
        .push(render_two_step_chain())
        .push(render_guardrails());
    prompt.finish()
}

fn build_variant(context: &RefinementContext, variant: PromptVariant) -> String {
    match context.settings.mode {
        Mode::Easy => build_easy(context, variant),
        Mode::Medium => build_medium(context, variant),
        Mode::Hard => build_hard(context, variant),
    }
}

pub fn build_single_prompt(context: &RefinementContext) -> String {
    build_variant(context, PromptVariant::Single)
}

/// Discovery, plan and execution prompts separated by a horizontal rule
pub fn build_prompt_pack(context: &RefinementContext) -> String {
    PromptVariant::PACK
        .iter()
        .map(|variant| build_variant(context, *variant))
        .collect::<Vec<_>>()
        .join(PACK_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Toggles;

    fn context(mode: Mode, toggles: Toggles) -> RefinementContext {
        RefinementContext {
            normalized_input: "Draft a plan.\nMust include steps.".to_string(),
            constraints: vec!["Must include steps.".to_string()],
            deliverables: vec!["plan".to_string()],
            settings: Settings::for_mode(mode).with_toggles(toggles),
        }
    }

    fn headings(prompt: &str) -> Vec<&str> {
        prompt.lines().filter(|line| line.starts_with('#')).collect()
    }

    #[test]
    fn test_render_list_strips_existing_markers() {
        let items = ["- dash", "* star", "3. numbered", "  plain  "];
        assert_eq!(
            render_list(&items[..], NONE_PROVIDED),
            "- dash\n- star\n- numbered\n- plain"
        );
        assert_eq!(render_list::<&str>(&[], "Nothing."), "- Nothing.");
    }

    #[test]
    fn test_render_deliverables_dedupes_but_definitions_do_not() {
        let repeated = vec!["plan".to_string(), "plan".to_string()];
        assert_eq!(render_deliverables(&repeated), "Provide the output as: plan.");
        assert_eq!(render_definitions(&repeated).lines().count(), 2);
        assert_eq!(
            render_deliverables(&[]),
            "Use a clear, structured Markdown response."
        );
        assert_eq!(render_definitions(&[]), "- None specified.");
    }

    #[test]
    fn test_easy_section_order() {
        let prompt = build_single_prompt(&context(Mode::Easy, Toggles::all(false)));
        assert_eq!(
            headings(&prompt),
            vec![
                "# Refined Prompt",
                "## Goal",
                "## Context",
                "## Input",
                "## Requested Output Format",
                "## Constraints",
                "## Output Format Rules",
                "## Guardrails",
            ]
        );
        assert!(prompt.starts_with("# Refined Prompt\n\nMode: easy\n\n## Goal\n\n"));
    }

    #[test]
    fn test_medium_section_order_with_toggles() {
        let prompt = build_single_prompt(&context(Mode::Medium, Toggles::all(true)));
        assert_eq!(
            headings(&prompt),
            vec![
                "# Refined Prompt",
                "## Role",
                "## Goal",
                "## Context",
                "## Constraints",
                "## Assumptions",
                "## Clarifying Questions",
                "## Acceptance Criteria",
                "## Output Format Rules",
                "## Guardrails",
            ]
        );
        assert!(prompt.contains(
            "## Clarifying Questions\n- What is the intended audience or user?\n- Are there any format or length preferences?"
        ));
        assert!(prompt.contains("## Assumptions\n- State assumptions if needed."));
        assert!(prompt.contains("## Acceptance Criteria\n- Define acceptance criteria if required."));
    }

    #[test]
    fn test_hard_section_order() {
        let prompt = build_single_prompt(&context(Mode::Hard, Toggles::all(true)));
        assert_eq!(
            headings(&prompt),
            vec![
                "# Refined Prompt",
                "## Role",
                "## Definitions",
                "## Goal",
                "## Non Goals",
                "## Constraints",
                "## Assumptions",
                "## Clarifying Questions",
                "## Acceptance Criteria",
                "## Validation Checklist",
                "## Output Format Rules",
                "## Two-Step Chain",
                "## Guardrails",
            ]
        );
        assert!(prompt.contains("- plan: deliver in a clean, skimmable format."));
        assert!(prompt.contains("1. Plan only: propose the plan without executing."));
    }

    #[test]
    fn test_focus_only_in_pack_variants() {
        let ctx = context(Mode::Easy, Toggles::all(false));
        assert!(!build_single_prompt(&ctx).contains("## Focus"));

        let pack = build_prompt_pack(&ctx);
        let parts: Vec<&str> = pack.split(PACK_SEPARATOR).collect();
        assert_eq!(parts.len(), 3);
        assert!(parts[0].starts_with("# Discovery Prompt\n\nMode: easy\n\n## Focus\nSurface missing details"));
        assert!(parts[1].starts_with("# Plan Prompt"));
        assert!(parts[1].contains("## Focus\nProvide a clear, ordered plan only."));
        assert!(parts[2].starts_with("# Execution Prompt"));
        assert!(parts[2].contains("## Focus\nExecute the plan and verify the outcome."));
    }

    #[test]
    fn test_guardrails_close_every_prompt() {
        for mode in Mode::ALL {
            let ctx = context(mode, mode.default_toggles());
            assert!(build_single_prompt(&ctx).ends_with(render_guardrails()));
            for part in build_prompt_pack(&ctx).split(PACK_SEPARATOR) {
                assert!(part.ends_with(render_guardrails()));
            }
        }
    }

    #[test]
    fn test_empty_context_renders_placeholders() {
        let ctx = RefinementContext {
            normalized_input: String::new(),
            constraints: Vec::new(),
            deliverables: Vec::new(),
            settings: Settings::for_mode(Mode::Easy),
        };
        let prompt = build_single_prompt(&ctx);
        assert!(prompt.contains("## Context\n\n(No input provided.)\n\n## Input\n\n(No input provided.)"));
        assert!(prompt.contains("## Constraints\n\n- None provided."));
        assert!(prompt.contains("- Use a clear, structured Markdown response."));
    }
}
