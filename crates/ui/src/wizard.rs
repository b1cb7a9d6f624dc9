//! The three-step reading flow.
//!
//! ```text
//! Intention --submit--> Select --last card--> Analysis
//!     ^                                          |
//!     +------------------- reset ----------------+
//! ```
//!
//! Reset is allowed from any step and clears both the intention and the
//! selection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, UiError};
use crate::models::selection::{SelectOutcome, Selection};

/// Wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// Waiting for the question
    #[default]
    Intention,
    /// Picking cards from the fan
    Select,
    /// Cards chosen; the reading can be requested
    Analysis,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intention => write!(f, "intention"),
            Self::Select => write!(f, "select"),
            Self::Analysis => write!(f, "analysis"),
        }
    }
}

/// One pass through the reading flow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wizard {
    step: Step,
    intention: String,
    selection: Selection,
}

impl Wizard {
    /// Start a wizard over an empty selection.
    #[must_use]
    pub const fn new(selection: Selection) -> Self {
        Self {
            step: Step::Intention,
            intention: String::new(),
            selection,
        }
    }

    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn intention(&self) -> &str {
        &self.intention
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Record the question and move on to card selection.
    ///
    /// The text is kept as typed; it only has to contain something other than
    /// whitespace.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` outside the intention step
    /// - `EmptyIntention` for blank text
    pub fn submit_intention(&mut self, text: &str) -> Result<()> {
        self.expect_step(Step::Intention, "submit an intention")?;
        if text.trim().is_empty() {
            return Err(UiError::EmptyIntention);
        }
        self.intention = text.to_string();
        self.step = Step::Select;
        tracing::debug!(len = text.len(), "Intention submitted");
        Ok(())
    }

    /// Select a card; filling the last slot moves to analysis.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` outside the select step, otherwise whatever
    /// [`Selection::select`] rejects.
    pub fn select(&mut self, index: usize) -> Result<SelectOutcome> {
        self.expect_step(Step::Select, "select a card")?;
        let outcome = self.selection.select(index)?;
        if matches!(outcome, SelectOutcome::Completed(_)) {
            self.step = Step::Analysis;
            tracing::info!(cards = ?self.selection.indices(), "Selection complete");
        }
        Ok(outcome)
    }

    /// The question and cards to send to the oracle, once in analysis.
    #[must_use]
    pub fn consultation(&self) -> Option<(&str, &[usize])> {
        (self.step == Step::Analysis).then(|| (self.intention.as_str(), self.selection.indices()))
    }

    /// Start over from the intention step.
    pub fn reset(&mut self) {
        self.intention.clear();
        self.selection.reset();
        self.step = Step::Intention;
    }

    fn expect_step(&self, step: Step, action: &'static str) -> Result<()> {
        if self.step == step {
            Ok(())
        } else {
            Err(UiError::InvalidTransition {
                step: self.step,
                action,
            })
        }
    }
}
