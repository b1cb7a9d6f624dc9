//! Error types for the card table.

use thiserror::Error;

use crate::wizard::Step;

/// Errors raised by layout, selection and wizard operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("card {index} is outside a deck of {deck_size}")]
    IndexOutOfRange { index: usize, deck_size: usize },

    #[error("card {0} is already selected")]
    AlreadySelected(usize),

    #[error("selection is full ({limit} cards)")]
    SelectionFull { limit: usize },

    #[error("cannot draw {requested} distinct cards, only {available} available")]
    NotEnoughCards { requested: usize, available: usize },

    #[error("intention cannot be empty")]
    EmptyIntention,

    #[error("cannot {action} during the {step} step")]
    InvalidTransition { step: Step, action: &'static str },
}

impl UiError {
    /// Create an invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }
}

/// Result type alias for card table operations
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = UiError::invalid_config("radius must be finite");
        assert_eq!(
            error.to_string(),
            "invalid configuration: radius must be finite"
        );

        let error = UiError::IndexOutOfRange {
            index: 78,
            deck_size: 78,
        };
        assert_eq!(error.to_string(), "card 78 is outside a deck of 78");

        let error = UiError::InvalidTransition {
            step: Step::Analysis,
            action: "select a card",
        };
        assert_eq!(
            error.to_string(),
            "cannot select a card during the analysis step"
        );
    }

    #[test]
    fn test_error_clone() {
        let error = UiError::SelectionFull { limit: 3 };
        assert_eq!(error.clone(), error);
    }
}
