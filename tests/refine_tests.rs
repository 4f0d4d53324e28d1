//! Integration tests for the refinement pipeline
//!
//! Covers section coverage per mode, pack structure, toggle gating,
//! determinism and empty input.

use text_to_prompt::engine::{
    build_context, build_prompt_pack, extract_constraints, extract_deliverables, normalize_text,
    refine, render_guardrails, split_lines,
};
use text_to_prompt::settings::{Mode, Settings, Toggles};

const SAMPLE_INPUT: &str = "Build a checklist. Must include timelines.";

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("missing {:?} in output", needle))
}

#[test]
fn test_easy_mode_sections() {
    let output = refine(SAMPLE_INPUT, &Settings::for_mode(Mode::Easy)).single;
    for heading in [
        "## Goal",
        "## Context",
        "## Input",
        "## Requested Output Format",
        "## Constraints",
    ] {
        assert!(output.contains(heading), "easy mode missing {}", heading);
    }
    assert!(output.contains("Provide the output as: checklist."));
    assert!(output.contains("## Constraints\n\n- Build a checklist. Must include timelines."));
}

#[test]
fn test_medium_mode_sections() {
    let output = refine(SAMPLE_INPUT, &Settings::for_mode(Mode::Medium)).single;
    let role = position(&output, "## Role");
    let goal = position(&output, "## Goal");
    let context = position(&output, "## Context");
    let constraints = position(&output, "## Constraints");
    assert!(role < goal && goal < context && context < constraints);
    assert!(!output.contains("## Input"));
}

#[test]
fn test_hard_mode_sections() {
    let output = refine(SAMPLE_INPUT, &Settings::for_mode(Mode::Hard)).single;
    for needle in [
        "## Definitions",
        "## Non Goals",
        "## Validation Checklist",
        "## Two-Step Chain",
        "Plan only",
        "Execute and verify",
    ] {
        assert!(output.contains(needle), "hard mode missing {}", needle);
    }
    assert!(position(&output, "## Validation Checklist") < position(&output, "## Output Format Rules"));
    assert!(position(&output, "## Output Format Rules") < position(&output, "## Two-Step Chain"));
    assert!(output.ends_with(render_guardrails()));
}

#[test]
fn test_pack_structure() {
    let pack = refine(SAMPLE_INPUT, &Settings::for_mode(Mode::Medium)).pack;
    let discovery = position(&pack, "# Discovery Prompt");
    let plan = position(&pack, "# Plan Prompt");
    let execution = position(&pack, "# Execution Prompt");
    assert!(discovery < plan && plan < execution);

    let parts: Vec<&str> = pack.split("\n\n---\n\n").collect();
    assert_eq!(parts.len(), 3);
    assert!(parts[0].starts_with("# Discovery Prompt"));
    assert!(parts[1].starts_with("# Plan Prompt"));
    assert!(parts[2].starts_with("# Execution Prompt"));
}

#[test]
fn test_toggle_gating() {
    let optional = [
        "## Assumptions",
        "## Clarifying Questions",
        "## Acceptance Criteria",
    ];
    for mode in Mode::ALL {
        let off = refine(
            SAMPLE_INPUT,
            &Settings::for_mode(mode).with_toggles(Toggles::all(false)),
        );
        let on = refine(
            SAMPLE_INPUT,
            &Settings::for_mode(mode).with_toggles(Toggles::all(true)),
        );
        for heading in optional {
            assert!(!off.single.contains(heading));
            assert!(!off.pack.contains(heading));
            assert!(on.single.contains(heading));
            assert_eq!(on.pack.matches(heading).count(), 3);
        }
    }
}

#[test]
fn test_single_toggle_is_independent() {
    let settings = Settings::for_mode(Mode::Easy).with_toggles(Toggles {
        assumptions: false,
        questions: true,
        acceptance: false,
    });
    let output = refine(SAMPLE_INPUT, &settings).single;
    assert!(output.contains("## Clarifying Questions\n- What is the target audience?"));
    assert!(!output.contains("## Assumptions"));
    assert!(!output.contains("## Acceptance Criteria"));
}

#[test]
fn test_refine_is_deterministic() {
    for mode in Mode::ALL {
        let settings = Settings::for_mode(mode);
        assert_eq!(refine(SAMPLE_INPUT, &settings), refine(SAMPLE_INPUT, &settings));
    }
}

#[test]
fn test_empty_input_renders_placeholders() {
    for mode in Mode::ALL {
        let result = refine("", &Settings::for_mode(mode));
        assert!(result.single.contains("## Constraints\n\n- None provided."));
        assert!(result.pack.contains("Use a clear, structured Markdown response."));
    }
    let medium = refine("", &Settings::for_mode(Mode::Medium)).single;
    assert!(medium.contains("## Context\n\n(No input provided.)"));
    let easy = refine("   \r\n  ", &Settings::for_mode(Mode::Easy)).single;
    assert_eq!(easy.matches("(No input provided.)").count(), 2);
    let hard = refine("", &Settings::for_mode(Mode::Hard)).single;
    assert!(hard.contains("## Definitions\n\n- None specified."));
}

#[test]
fn test_normalization_example() {
    let input = "  Hello   world\r\n\r\n-   first   bullet\r\n   - second   bullet  ";
    assert_eq!(
        normalize_text(input),
        "Hello world\n\n- first bullet\n- second bullet"
    );
}

#[test]
fn test_constraint_extraction_example() {
    let input = [
        "Must include tests",
        "Do not use React",
        "Avoid external APIs",
        "Include keyboard support",
        "This line is informational",
    ]
    .join("\n");
    let normalized = normalize_text(&input);
    let constraints = extract_constraints(&split_lines(&normalized));
    assert_eq!(constraints.len(), 4);
    assert!(!constraints.iter().any(|c| c.contains("informational")));
    assert_eq!(constraints[0], "Must include tests");
    assert_eq!(constraints[3], "Include keyboard support");
}

#[test]
fn test_duplicate_constraints_collapse() {
    let ctx = build_context(
        "Avoid jargon\nAVOID JARGON\n- avoid jargon",
        &Settings::default(),
    );
    assert_eq!(ctx.constraints, vec!["Avoid jargon", "- avoid jargon"]);
}

#[test]
fn test_deliverables_are_distinct_and_in_vocabulary_order() {
    let found = extract_deliverables("An outline. Then a report, another report, and a table.");
    assert_eq!(found, vec!["report", "table", "outline"]);

    let ctx = build_context(
        "An outline. Then a report, another report, and a table.",
        &Settings::for_mode(Mode::Hard),
    );
    let pack = build_prompt_pack(&ctx);
    assert!(pack.contains("Provide the output as: report, table, outline."));
    assert_eq!(
        pack.matches("- report: deliver in a clean, skimmable format.").count(),
        3
    );
}

#[test]
fn test_existing_bullets_are_not_doubled() {
    let output = refine(
        "* Must avoid emojis\n1. Include a summary",
        &Settings::for_mode(Mode::Medium),
    )
    .single;
    assert!(output.contains("## Constraints\n\n- Must avoid emojis\n- Include a summary"));
    assert!(!output.contains("- * "));
    assert!(!output.contains("- 1. "));
}
