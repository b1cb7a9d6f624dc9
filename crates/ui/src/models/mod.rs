//! Deck and selection models.

pub mod deck;
pub mod selection;
