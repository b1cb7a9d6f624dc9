//! Pointer interaction for the fanned deck.
//!
//! - `hover`: hovered-card tracking and rotated-rectangle hit-testing

pub mod hover;
