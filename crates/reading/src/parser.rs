//! Prediction text segmentation.
//!
//! A prediction is organised in up to three segments separated by a line that
//! holds exactly `---`:
//!
//! ```text
//! intro prose
//! ---
//! ### First card
//! interpretation
//! ### Second card
//! interpretation
//! ---
//! ## Summary
//! closing prose
//! ```
//!
//! Input without a separator is treated as a single introduction.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Separator between intro, body and summary. Must sit on its own line.
const SEGMENT_SEPARATOR: &str = "\n---\n";

// Hardcoded patterns, exercised by `test_patterns_compile`.
#[expect(clippy::expect_used)]
static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#+[ \t]").expect("hardcoded regex pattern is valid"));

#[expect(clippy::expect_used)]
static SUMMARY_HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#+[ \t].*$").expect("hardcoded regex pattern is valid"));

/// A titled subdivision of the body, one per interpreted card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: String,
}

impl Section {
    fn from_lines(title: String, lines: &[&str]) -> Self {
        Self {
            title,
            content: lines.join("\n").trim().to_string(),
        }
    }
}

/// Structured form of a prediction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPrediction {
    pub intro: String,
    pub sections: Vec<Section>,
    pub summary: String,
}

impl ParsedPrediction {
    /// True when there is nothing to display.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intro.is_empty() && self.sections.is_empty() && self.summary.is_empty()
    }

    /// Section at a card position, if the oracle wrote one.
    #[must_use]
    pub fn section(&self, position: usize) -> Option<&Section> {
        self.sections.get(position)
    }

    /// Summary paragraphs, one per line.
    pub fn summary_lines(&self) -> impl Iterator<Item = &str> {
        self.summary.split('\n').filter(|line| !line.is_empty())
    }
}

/// Split a prediction into intro, sections and summary.
///
/// Never fails. Empty input yields an empty [`ParsedPrediction`]; input
/// without a `---` separator line becomes the intro verbatim.
#[must_use]
pub fn parse(text: &str) -> ParsedPrediction {
    if text.is_empty() {
        return ParsedPrediction::default();
    }

    let normalized = text.replace("\r\n", "\n");

    let Some((intro, rest)) = normalized.split_once(SEGMENT_SEPARATOR) else {
        return ParsedPrediction {
            intro: text.to_string(),
            ..ParsedPrediction::default()
        };
    };

    // Anything after a third separator is dropped.
    let mut rest = rest.split(SEGMENT_SEPARATOR);
    let body = rest.next().unwrap_or_default();
    let summary = rest.next().unwrap_or_default();

    ParsedPrediction {
        intro: intro.to_string(),
        sections: split_sections(body),
        summary: strip_summary_heading(summary),
    }
}

/// Collect `#`-headed sections from the body. Lines before the first heading
/// belong to no section and are discarded.
fn split_sections(body: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in body.split('\n') {
        if HEADING_REGEX.is_match(line) {
            if let Some((title, lines)) = current.take() {
                sections.push(Section::from_lines(title, &lines));
            }
            let title = HEADING_REGEX.replace(line, "").trim().to_string();
            current = Some((title, Vec::new()));
        } else if let Some((_, lines)) = current.as_mut() {
            lines.push(line);
        }
    }

    if let Some((title, lines)) = current {
        sections.push(Section::from_lines(title, &lines));
    }

    sections
}

/// Remove the first heading line of the summary, wherever it sits.
fn strip_summary_heading(summary: &str) -> String {
    SUMMARY_HEADING_REGEX.replace(summary, "").trim().to_string()
}
