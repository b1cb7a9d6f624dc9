//! Fan layout for deck items
//!
//! Places N items along a circular arc pivoted below the fan. Each item gets a
//! rotation proportional to its index, a Cartesian offset derived from that
//! rotation, and a stacking order that keeps the middle of the fan on top.
//!
//! # Formula
//! ```text
//! step      = arc / (N - 1)
//! rotation  = -arc / 2 + index * step  (+ hover repulsion)
//! offset_x  = radius * sin(rotation)
//! offset_y  = radius * (1 - cos(rotation))     upward arc
//!           = -radius * cos(rotation)          pivoted arc
//! stack     = ceiling - floor(|index - N / 2|)
//! ```
//!
//! Offsets are in layout units with x growing right and y growing down, the
//! same space the renderer applies its transforms in.

use serde::{Deserialize, Serialize};

use crate::error::{Result, UiError};
use crate::models::selection::Selection;

/// Total angular spread of the default fan, in degrees.
pub const DEFAULT_ARC_ANGLE_DEGREES: f64 = 100.0;
/// Default arc radius. Large radii give a flatter curve.
pub const DEFAULT_RADIUS: f64 = 1500.0;
/// Stack order of the centre item.
pub const DEFAULT_STACK_CEILING: i32 = 100;
/// Stack order of the hovered item.
pub const DEFAULT_HOVER_STACK_ORDER: i32 = 1000;

/// Where the arc's pivot sits relative to the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArcOrientation {
    /// Items rise from a bottom-centre anchor; edge items sit lower.
    #[default]
    Upward,
    /// Pivot above the viewport; offsets measured from the pivot itself.
    Pivoted,
}

/// Neighbour repulsion around the hovered item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepulsionConfig {
    /// Extra rotation, in degrees, applied to the immediate neighbours
    pub push_strength_degrees: f64,
    /// Index distance at which the push fades to zero
    pub influence_range: f64,
}

impl RepulsionConfig {
    /// Creates a new RepulsionConfig with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if either value is non-finite or the range is
    /// not positive.
    pub fn new(push_strength_degrees: f64, influence_range: f64) -> Result<Self> {
        let config = Self {
            push_strength_degrees,
            influence_range,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.push_strength_degrees.is_finite() {
            return Err(UiError::invalid_config(format!(
                "push strength must be finite, got: {}",
                self.push_strength_degrees
            )));
        }
        if !self.influence_range.is_finite() || self.influence_range <= 0.0 {
            return Err(UiError::invalid_config(format!(
                "influence range must be positive and finite, got: {}",
                self.influence_range
            )));
        }
        Ok(())
    }

    /// Rotation offset for `index` while `hovered` is under the pointer.
    fn offset(&self, index: usize, hovered: usize) -> f64 {
        if index == hovered {
            return 0.0;
        }
        let distance = index as f64 - hovered as f64;
        let magnitude = distance.abs();
        if magnitude >= self.influence_range {
            return 0.0;
        }
        distance.signum() * self.push_strength_degrees * (1.0 - magnitude / self.influence_range)
    }
}

impl Default for RepulsionConfig {
    /// Pushes neighbours up to 12° aside, fading out five cards away
    fn default() -> Self {
        Self {
            push_strength_degrees: 12.0,
            influence_range: 5.0,
        }
    }
}

/// Configuration for a fan layout pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FanConfig {
    pub arc_angle_degrees: f64,
    pub radius: f64,
    pub orientation: ArcOrientation,
    pub repulsion: Option<RepulsionConfig>,
    pub base_stack_ceiling: i32,
    pub hover_stack_order: i32,
}

impl Default for FanConfig {
    fn default() -> Self {
        Self {
            arc_angle_degrees: DEFAULT_ARC_ANGLE_DEGREES,
            radius: DEFAULT_RADIUS,
            orientation: ArcOrientation::Upward,
            repulsion: None,
            base_stack_ceiling: DEFAULT_STACK_CEILING,
            hover_stack_order: DEFAULT_HOVER_STACK_ORDER,
        }
    }
}

impl FanConfig {
    /// Creates a FanConfig with the given spread and radius
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if either value is non-finite.
    pub fn new(arc_angle_degrees: f64, radius: f64) -> Result<Self> {
        let config = Self {
            arc_angle_degrees,
            radius,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the arc orientation.
    #[must_use]
    pub const fn with_orientation(mut self, orientation: ArcOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Enable neighbour repulsion on hover.
    #[must_use]
    pub const fn with_repulsion(mut self, repulsion: RepulsionConfig) -> Self {
        self.repulsion = Some(repulsion);
        self
    }

    /// Check that every numeric parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for non-finite arc angle, radius or repulsion.
    pub fn validate(&self) -> Result<()> {
        if !self.arc_angle_degrees.is_finite() {
            return Err(UiError::invalid_config(format!(
                "arc angle must be finite, got: {}",
                self.arc_angle_degrees
            )));
        }
        if !self.radius.is_finite() {
            return Err(UiError::invalid_config(format!(
                "radius must be finite, got: {}",
                self.radius
            )));
        }
        self.repulsion.as_ref().map_or(Ok(()), RepulsionConfig::validate)
    }

    /// Stack order given to the hovered item, always above the ceiling.
    #[must_use]
    pub fn promoted_stack_order(&self) -> i32 {
        self.hover_stack_order
            .max(self.base_stack_ceiling.saturating_add(1))
    }
}

/// Placement of one item in the fan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutStyle {
    pub offset_x: f64,
    pub offset_y: f64,
    pub rotation_degrees: f64,
    pub stack_order: i32,
}

/// A deck item together with its placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedCard {
    pub index: usize,
    pub style: LayoutStyle,
}

/// Compute the placement of one item.
///
/// Pure function: the same arguments always give bit-identical output.
///
/// # Errors
///
/// Returns `InvalidConfig` when `total_count <= 1` (no angle step exists) or
/// the config holds non-finite values.
pub fn layout(
    index: usize,
    total_count: usize,
    hovered: Option<usize>,
    config: &FanConfig,
) -> Result<LayoutStyle> {
    config.validate()?;
    if total_count <= 1 {
        return Err(UiError::invalid_config(format!(
            "a fan needs at least 2 items, got: {total_count}"
        )));
    }

    let angle_step = config.arc_angle_degrees / total_count.saturating_sub(1) as f64;
    let base_rotation = -config.arc_angle_degrees / 2.0 + index as f64 * angle_step;

    let push = match (config.repulsion, hovered) {
        (Some(repulsion), Some(hovered)) => repulsion.offset(index, hovered),
        _ => 0.0,
    };
    let rotation_degrees = base_rotation + push;

    let radians = rotation_degrees.to_radians();
    let offset_x = config.radius * radians.sin();
    let offset_y = match config.orientation {
        ArcOrientation::Upward => config.radius * (1.0 - radians.cos()),
        ArcOrientation::Pivoted => -config.radius * radians.cos(),
    };

    let stack_order = if hovered == Some(index) {
        config.promoted_stack_order()
    } else {
        base_stack_order(index, total_count, config.base_stack_ceiling)
    };

    Ok(LayoutStyle {
        offset_x,
        offset_y,
        rotation_degrees,
        stack_order,
    })
}

/// Centre items stack above the edges.
fn base_stack_order(index: usize, total_count: usize, ceiling: i32) -> i32 {
    let distance = (index as f64 - total_count as f64 / 2.0).abs().floor();
    ceiling.saturating_sub(distance as i32)
}

/// Lay out every unselected item of a selection's deck.
///
/// Positions are computed against the full deck size, so remaining cards keep
/// their place when others are picked out of the fan.
///
/// # Errors
///
/// Propagates `InvalidConfig` from [`layout`].
pub fn fan(selection: &Selection, hovered: Option<usize>, config: &FanConfig) -> Result<Vec<PlacedCard>> {
    let total_count = selection.deck().size();
    selection
        .unselected()
        .map(|index| {
            layout(index, total_count, hovered, config).map(|style| PlacedCard { index, style })
        })
        .collect()
}
