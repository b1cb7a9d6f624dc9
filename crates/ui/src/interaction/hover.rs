//! Hover state and hit-testing for fanned cards
//!
//! A fanned card is a rectangle hinged at its bottom-centre pivot, which sits
//! at the card's layout offset, and rotated clockwise by its layout rotation.
//! Hit-testing maps the pointer into that card's local frame and checks the
//! rectangle there.
//!
//! # Architecture
//!
//! - **HoverState**: the single transient hovered index
//! - **contains_point**: rotated-rectangle test for one placed card
//! - **hit_test**: topmost card under the pointer among many
//!
//! # Examples
//!
//! ```
//! use arcana_ui::{CardSize, FanConfig, HoverState, Point, fan, hit_test};
//! use arcana_ui::{Deck, Selection};
//!
//! # fn example() -> arcana_ui::Result<()> {
//! let selection = Selection::new(Deck::full(), 3)?;
//! let placed = fan(&selection, None, &FanConfig::default())?;
//!
//! let mut hover = HoverState::default();
//! if let Some(index) = hit_test(Point::new(0.0, -80.0)?, &placed, CardSize::default()) {
//!     hover.enter(index);
//! }
//! assert!(hover.current().is_some());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, UiError};
use crate::layout::fan::PlacedCard;

/// Card size used by the fan when none is configured (layout units)
const DEFAULT_CARD_WIDTH: f64 = 100.0;
const DEFAULT_CARD_HEIGHT: f64 = 160.0;

/// Which card, if any, is under the pointer. At most one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    hovered: Option<usize>,
}

impl HoverState {
    /// Currently hovered card
    #[must_use]
    pub const fn current(&self) -> Option<usize> {
        self.hovered
    }

    /// Pointer entered a card. Returns true if the hovered card changed.
    pub fn enter(&mut self, index: usize) -> bool {
        let changed = self.hovered != Some(index);
        self.hovered = Some(index);
        changed
    }

    /// Pointer left a card. Ignored unless that card is the hovered one, so a
    /// late leave event cannot clear a newer hover.
    pub fn leave(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        }
    }

    /// Forget the hover entirely (e.g. the card was selected).
    pub fn clear(&mut self) {
        self.hovered = None;
    }
}

/// A pointer position in layout space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new Point with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for non-finite coordinates.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(UiError::invalid_config(format!(
                "point coordinates must be finite, got: ({x}, {y})"
            )));
        }
        Ok(Self { x, y })
    }
}

/// Card dimensions in layout units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardSize {
    pub width: f64,
    pub height: f64,
}

impl CardSize {
    /// Creates a new CardSize with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` unless both dimensions are positive and finite.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(UiError::invalid_config(format!(
                "card size must be positive, got: {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }
}

impl Default for CardSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CARD_WIDTH,
            height: DEFAULT_CARD_HEIGHT,
        }
    }
}

/// Result of a hit test operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTestResult {
    /// The point is inside the card
    Hit,
    /// The point is outside the card
    Miss,
}

impl HitTestResult {
    /// Converts hit test result to boolean
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }
}

/// Tests whether a point lies on a placed card.
///
/// The point is translated to the card's pivot and rotated back by the card's
/// rotation, then checked against `[-w/2, w/2] x [-h, 0]`.
#[must_use]
pub fn contains_point(card: &PlacedCard, point: Point, size: CardSize) -> HitTestResult {
    let dx = point.x - card.style.offset_x;
    let dy = point.y - card.style.offset_y;

    let (sin, cos) = card.style.rotation_degrees.to_radians().sin_cos();
    let local_x = cos * dx + sin * dy;
    let local_y = -sin * dx + cos * dy;

    let inside_x = local_x.abs() <= size.width / 2.0;
    let inside_y = (-size.height..=0.0).contains(&local_y);

    if inside_x && inside_y {
        HitTestResult::Hit
    } else {
        HitTestResult::Miss
    }
}

/// Index of the topmost card under the pointer.
///
/// Highest stack order wins; on a tie the card later in `placed` wins, since
/// it is drawn last.
#[must_use]
pub fn hit_test(point: Point, placed: &[PlacedCard], size: CardSize) -> Option<usize> {
    placed
        .iter()
        .filter(|card| contains_point(card, point, size).is_hit())
        .max_by_key(|card| card.style.stack_order)
        .map(|card| card.index)
}
