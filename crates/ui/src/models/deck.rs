//! Fixed-size deck of selectable card slots.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{Result, UiError};

/// Full tarot deck: 22 major and 56 minor arcana
pub const FULL_DECK_SIZE: usize = 78;
/// Major arcana only
pub const MAJOR_ARCANA_SIZE: usize = 22;

/// Rejection-sampling attempts allowed per requested card before falling back
/// to sampling from the explicit list of remaining indices.
const DRAW_ATTEMPTS_PER_CARD: usize = 32;

/// An ordered deck addressed by stable indices `0..size`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    size: usize,
}

impl Deck {
    /// Creates a deck with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for an empty deck.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(UiError::invalid_config("deck must hold at least one card"));
        }
        Ok(Self { size })
    }

    /// The 78-card deck
    #[must_use]
    pub const fn full() -> Self {
        Self {
            size: FULL_DECK_SIZE,
        }
    }

    /// The 22 major arcana
    #[must_use]
    pub const fn major_arcana() -> Self {
        Self {
            size: MAJOR_ARCANA_SIZE,
        }
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index < self.size
    }

    /// Check that an index addresses a card in this deck.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` otherwise.
    pub const fn check(&self, index: usize) -> Result<usize> {
        if self.contains(index) {
            Ok(index)
        } else {
            Err(UiError::IndexOutOfRange {
                index,
                deck_size: self.size,
            })
        }
    }

    /// Draw `count` distinct indices uniformly, skipping those in `exclude`.
    ///
    /// Uses rejection sampling with an explicit membership check. The number
    /// of attempts is bounded; once exhausted the remaining cards are drawn
    /// from the list of still-available indices.
    ///
    /// # Errors
    ///
    /// Returns `NotEnoughCards` when fewer than `count` indices are available.
    pub fn draw_distinct<R: Rng>(
        &self,
        rng: &mut R,
        count: usize,
        exclude: &HashSet<usize>,
    ) -> Result<Vec<usize>> {
        let excluded = exclude.iter().filter(|&&i| self.contains(i)).count();
        let available = self.size.saturating_sub(excluded);
        if count > available {
            return Err(UiError::NotEnoughCards {
                requested: count,
                available,
            });
        }

        let mut used: HashSet<usize> = exclude.clone();
        let mut drawn = Vec::with_capacity(count);
        let attempts = count.saturating_mul(DRAW_ATTEMPTS_PER_CARD);

        for _ in 0..attempts {
            if drawn.len() >= count {
                break;
            }
            let candidate = rng.gen_range(0..self.size);
            if used.insert(candidate) {
                drawn.push(candidate);
            }
        }

        if drawn.len() < count {
            tracing::debug!(
                drawn = drawn.len(),
                count,
                "Rejection budget spent, drawing from remaining cards"
            );
            let mut remaining: Vec<usize> = (0..self.size).filter(|i| !used.contains(i)).collect();
            remaining.shuffle(rng);
            drawn.extend(remaining.into_iter().take(count.saturating_sub(drawn.len())));
        }

        Ok(drawn)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::full()
    }
}
