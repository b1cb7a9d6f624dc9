//! Markdown-lite bold emphasis.
//!
//! Only `**bold**` is recognised. Matching is non-greedy and stays within a
//! line, so `**a** and **b**` gives two bold runs. An opening `**` that never
//! closes is kept as literal text.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[expect(clippy::expect_used)]
static BOLD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("hardcoded regex pattern is valid"));

/// A run of text with uniform weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

impl Span {
    /// Create a plain run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// Split text into alternating plain and bold runs, in original order.
///
/// Empty runs are omitted, so `"**x**"` yields a single bold span.
#[must_use]
pub fn split_bold_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for captures in BOLD_REGEX.captures_iter(text) {
        let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        push_run(&mut spans, text.get(cursor..whole.start()), false);
        push_run(&mut spans, Some(inner.as_str()), true);
        cursor = whole.end();
    }

    push_run(&mut spans, text.get(cursor..), false);
    spans
}

fn push_run(spans: &mut Vec<Span>, run: Option<&str>, bold: bool) {
    match run {
        Some(text) if !text.is_empty() => spans.push(Span {
            text: text.to_string(),
            bold,
        }),
        _ => {}
    }
}
