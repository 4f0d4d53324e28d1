//! Text normalization and signal extraction
//!
//! Provides pure functions over user text:
//! - `normalize_text`: canonical line endings, whitespace, bullets and blank lines
//! - `extract_constraints`: lines that read like requirements ("must", "avoid", ...)
//! - `extract_deliverables`: output types mentioned anywhere in the text
//!
//! # Examples
//!
//! ```
//! use text_to_prompt::engine::parse::{extract_constraints, normalize_text, split_lines};
//!
//! let text = normalize_text("  Write a   report\r\n\r\n\r\n*   Must cite sources ");
//! assert_eq!(text, "Write a report\n\n* Must cite sources");
//!
//! let constraints = extract_constraints(&split_lines(&text));
//! assert_eq!(constraints, vec!["* Must cite sources".to_string()]);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Words that mark a line as a constraint, matched as whole words
const CONSTRAINT_PATTERNS: &[&str] = &[
    "must", "must not", "do not", "don't", "avoid", "include", "exclude",
];

/// Output types recognised in the input, in reporting order
pub const DELIVERABLE_KEYWORDS: &[&str] = &[
    "report",
    "code",
    "email",
    "plan",
    "checklist",
    "proposal",
    "summary",
    "spec",
    "specification",
    "table",
    "list",
    "diagram",
    "presentation",
    "guide",
    "brief",
    "outline",
];

static CONSTRAINT_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    CONSTRAINT_PATTERNS
        .iter()
        .map(|word| whole_word(word))
        .collect()
});

static DELIVERABLE_REGEXES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    DELIVERABLE_KEYWORDS
        .iter()
        .map(|keyword| (*keyword, whole_word(keyword)))
        .collect()
});

/// Marker at the start of a bullet line: `-`, `*`, `•` or `12.`, then whitespace
static BULLET_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([-*•]|\d+\.)\s+(.*)$").expect("Valid regex pattern"));

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Valid regex pattern"));

/// Case-insensitive match of `word` between ASCII word boundaries.
///
/// Non-ASCII letters count as boundaries, so "mustér" still contains "must".
fn whole_word(word: &str) -> Regex {
    Regex::new(&format!(r"(?i-u)\b{}\b", regex::escape(word))).expect("Valid regex pattern")
}

fn collapse_spaces(value: &str) -> String {
    WHITESPACE_RUN.replace_all(value, " ").trim().to_string()
}

/// Split a bullet line into its marker and the remaining content.
///
/// Leading indentation is ignored; the marker is returned verbatim.
pub fn split_bullet(line: &str) -> Option<(&str, &str)> {
    let caps = BULLET_REGEX.captures(line.trim_start())?;
    let marker = caps.get(1)?.as_str();
    let content = caps.get(2).map_or("", |m| m.as_str());
    Some((marker, content))
}

fn normalize_line(line: &str) -> String {
    if line.trim().is_empty() {
        return String::new();
    }

    match split_bullet(line) {
        Some((marker, content)) => format!("{} {}", marker, collapse_spaces(content)),
        None => collapse_spaces(line),
    }
}

/// Canonicalize user text.
///
/// Line endings become `\n`, every line is collapsed and trimmed, bullet
/// markers are kept with exactly one space after them, the document is
/// trimmed of blank lines and no more than one blank line survives between
/// content lines. Applying it twice gives the same result as applying it once.
pub fn normalize_text(input: &str) -> String {
    let unified = input.replace("\r\n", "\n").replace('\r', "\n");

    let cleaned: Vec<String> = unified.split('\n').map(normalize_line).collect();

    let start = cleaned.iter().position(|line| !line.is_empty());
    let end = cleaned.iter().rposition(|line| !line.is_empty());
    let (Some(start), Some(end)) = (start, end) else {
        return String::new();
    };

    let mut collapsed: Vec<&str> = Vec::with_capacity(end - start + 1);
    let mut last_was_empty = false;
    for line in &cleaned[start..=end] {
        if line.is_empty() {
            if !last_was_empty {
                collapsed.push("");
            }
            last_was_empty = true;
        } else {
            collapsed.push(line);
            last_was_empty = false;
        }
    }

    collapsed.join("\n")
}

pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Collect lines that state a requirement.
///
/// A line qualifies when any constraint word appears in it as a whole word,
/// ignoring case. Lines are trimmed, and repeats that differ only by case
/// are dropped in favour of the first occurrence.
pub fn extract_constraints<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut results = Vec::new();
    let mut seen = HashSet::new();

    for line in lines.iter().map(AsRef::as_ref) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if CONSTRAINT_REGEXES.iter().any(|re| re.is_match(trimmed))
            && seen.insert(trimmed.to_lowercase())
        {
            results.push(trimmed.to_string());
        }
    }

    results
}

/// List the deliverable keywords mentioned in `text`.
///
/// Results follow [`DELIVERABLE_KEYWORDS`] order, not the order of
/// appearance, and each keyword appears at most once.
pub fn extract_deliverables(text: &str) -> Vec<String> {
    DELIVERABLE_REGEXES
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(keyword, _)| keyword.to_string())
        .collect()
}
