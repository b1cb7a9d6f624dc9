//! View-state logic for the card table, independent of any renderer.
//!
//! ## Module Structure
//! - `layout`: fan placement of deck items along an arc
//! - `interaction`: hover tracking and pointer hit-testing
//! - `models`: deck and ordered card selection
//! - `wizard`: the intention → select → analysis flow
//! - `error`: error types shared by the modules above
//!
//! Every function takes explicit state snapshots (deck, selection, hovered
//! index) and returns new values; nothing here keeps ambient globals.

#![forbid(unsafe_code)]

pub mod error;
pub mod interaction;
pub mod layout;
pub mod models;
pub mod wizard;

pub use error::{Result, UiError};
pub use interaction::hover::{CardSize, HoverState, Point, hit_test};
pub use layout::fan::{ArcOrientation, FanConfig, LayoutStyle, PlacedCard, RepulsionConfig, fan, layout};
pub use models::deck::Deck;
pub use models::selection::{SelectOutcome, Selection};
pub use wizard::{Step, Wizard};
