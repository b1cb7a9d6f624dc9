//! Ordered card selection.
//!
//! Cards move from the fan into numbered slots. Selection is monotonic: a card
//! cannot be put back, only the whole selection can be reset.

use serde::{Deserialize, Serialize};

use crate::error::{Result, UiError};
use crate::models::deck::Deck;

/// Cards picked in the fan design; the grid design used four.
pub const DEFAULT_SELECTION_LIMIT: usize = 3;

/// What a successful selection did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The card went into this (0-based) slot; more are needed.
    Selected { slot: usize },
    /// The last slot was filled. Carries the indices in selection order.
    Completed(Vec<usize>),
}

/// Selected cards of a deck, in the order they were picked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    deck: Deck,
    limit: usize,
    selected: Vec<usize>,
}

impl Selection {
    /// Creates an empty selection
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `limit` is zero or larger than the deck.
    pub fn new(deck: Deck, limit: usize) -> Result<Self> {
        if limit == 0 || limit > deck.size() {
            return Err(UiError::invalid_config(format!(
                "selection limit must be between 1 and {}, got: {limit}",
                deck.size()
            )));
        }
        Ok(Self {
            deck,
            limit,
            selected: Vec::with_capacity(limit),
        })
    }

    /// Move a card from the fan into the next free slot.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfRange` if the index is not in the deck
    /// - `AlreadySelected` if the card already occupies a slot
    /// - `SelectionFull` if every slot is taken
    pub fn select(&mut self, index: usize) -> Result<SelectOutcome> {
        self.deck.check(index)?;
        if self.is_selected(index) {
            return Err(UiError::AlreadySelected(index));
        }
        if self.is_complete() {
            return Err(UiError::SelectionFull { limit: self.limit });
        }

        let slot = self.selected.len();
        self.selected.push(index);
        tracing::debug!(index, slot, limit = self.limit, "Card selected");

        if self.is_complete() {
            Ok(SelectOutcome::Completed(self.selected.clone()))
        } else {
            Ok(SelectOutcome::Selected { slot })
        }
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.selected.len() >= self.limit
    }

    /// Slots still to fill
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.selected.len())
    }

    /// Every slot, filled or not, in order
    #[must_use]
    pub fn slots(&self) -> Vec<Option<usize>> {
        (0..self.limit).map(|slot| self.selected.get(slot).copied()).collect()
    }

    /// Selected indices in selection order
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.selected
    }

    /// Cards still in the fan, in deck order
    pub fn unselected(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.deck.size()).filter(|index| !self.is_selected(*index))
    }

    #[must_use]
    pub const fn deck(&self) -> Deck {
        self.deck
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Return every card to the fan.
    pub fn reset(&mut self) {
        self.selected.clear();
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            deck: Deck::full(),
            limit: DEFAULT_SELECTION_LIMIT,
            selected: Vec::with_capacity(DEFAULT_SELECTION_LIMIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_until_complete() -> Result<()> {
        let mut selection = Selection::default();

        assert_eq!(selection.select(10)?, SelectOutcome::Selected { slot: 0 });
        assert_eq!(selection.select(3)?, SelectOutcome::Selected { slot: 1 });
        assert_eq!(selection.remaining(), 1);
        assert_eq!(selection.select(77)?, SelectOutcome::Completed(vec![10, 3, 77]));

        assert!(selection.is_complete());
        assert_eq!(selection.indices(), &[10, 3, 77]);
        Ok(())
    }

    #[test]
    fn test_duplicate_is_rejected() -> Result<()> {
        let mut selection = Selection::default();
        selection.select(5)?;
        assert_eq!(selection.select(5), Err(UiError::AlreadySelected(5)));
        assert_eq!(selection.indices(), &[5]);
        Ok(())
    }

    #[test]
    fn test_full_selection_is_rejected() -> Result<()> {
        let mut selection = Selection::new(Deck::full(), 1)?;
        selection.select(0)?;
        assert_eq!(selection.select(1), Err(UiError::SelectionFull { limit: 1 }));
        Ok(())
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut selection = Selection::default();
        assert!(matches!(
            selection.select(78),
            Err(UiError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_invalid_limits() {
        assert!(Selection::new(Deck::full(), 0).is_err());
        assert!(Selection::new(Deck::major_arcana(), 23).is_err());
        assert!(Selection::new(Deck::major_arcana(), 4).is_ok());
    }

    #[test]
    fn test_slots_and_unselected() -> Result<()> {
        let mut selection = Selection::new(Deck::new(5)?, 3)?;
        selection.select(4)?;
        selection.select(1)?;

        assert_eq!(selection.slots(), vec![Some(4), Some(1), None]);
        assert_eq!(selection.unselected().collect::<Vec<_>>(), vec![0, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_reset_returns_cards() -> Result<()> {
        let mut selection = Selection::default();
        selection.select(1)?;
        selection.reset();
        assert!(selection.indices().is_empty());
        assert_eq!(selection.remaining(), 3);
        assert_eq!(selection.unselected().count(), 78);
        Ok(())
    }
}
