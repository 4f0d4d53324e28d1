//! Closing guardrail section shared by every rendered prompt

const GUARDRAILS: &str = "## Guardrails
- Do not invent facts, sources, or data; say so when information is missing.
- Stay within the scope of the request and the constraints above.
- Flag conflicting constraints instead of silently choosing one.
- Ask for clarification before proceeding if a critical detail is unknown.";

/// The guardrail block appended as the last section of each prompt.
///
/// Identical for every mode and prompt variant.
pub fn render_guardrails() -> &'static str {
    GUARDRAILS
}
