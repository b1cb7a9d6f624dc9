//! Terminal rendering of a reading.
//!
//! Each paragraph is one line of the prediction; `**bold**` runs are shown in
//! ANSI bold unless plain output is requested.

use std::fmt;

use arcana_oracle::Reading;
use arcana_reading::split_bold_spans;
use crossterm::style::Stylize;

/// Render one line, styling its bold spans.
#[must_use]
pub fn render_line(line: &str, plain: bool) -> String {
    split_bold_spans(line)
        .into_iter()
        .map(|span| {
            if span.bold && !plain {
                span.text.bold().to_string()
            } else {
                span.text
            }
        })
        .collect()
}

fn heading(text: &str, plain: bool) -> String {
    if plain {
        text.to_string()
    } else {
        text.to_string().bold().to_string()
    }
}

/// A reading laid out for the terminal.
#[derive(Debug, Clone, Copy)]
pub struct ReadingView<'a> {
    reading: &'a Reading,
    plain: bool,
}

impl<'a> ReadingView<'a> {
    #[must_use]
    pub const fn new(reading: &'a Reading, plain: bool) -> Self {
        Self { reading, plain }
    }

    fn paragraphs(&self, f: &mut fmt::Formatter<'_>, text: &str, indent: &str) -> fmt::Result {
        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            writeln!(f, "{indent}{}", render_line(line, self.plain))?;
        }
        Ok(())
    }
}

impl fmt::Display for ReadingView<'_> {
    /// Question, intro, one block per card, summary.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reading = self.reading;
        let prediction = &reading.prediction;

        writeln!(f, "{} {}", heading("Question:", self.plain), reading.question)?;
        writeln!(f)?;
        self.paragraphs(f, &prediction.intro, "")?;

        let blocks = reading.cards.len().max(prediction.sections.len());
        for position in 0..blocks {
            let card = reading.cards.get(position);
            let section = prediction.section(position);

            let title = match (card, section) {
                (Some(card), _) if card.position.is_empty() => card.name.clone(),
                (Some(card), _) => format!("{}: {}", card.position, card.name),
                (None, Some(section)) => section.title.clone(),
                (None, None) => continue,
            };

            writeln!(f)?;
            writeln!(f, "{}", heading(&title, self.plain))?;
            if let Some(section) = section {
                self.paragraphs(f, &section.content, "  ")?;
            }
        }

        if !prediction.summary.is_empty() {
            writeln!(f)?;
            for line in prediction.summary_lines() {
                writeln!(f, "{}", render_line(line, self.plain))?;
            }
        }

        Ok(())
    }
}

/// Render a full reading to a string.
#[must_use]
pub fn render_reading(reading: &Reading, plain: bool) -> String {
    ReadingView::new(reading, plain).to_string()
}
