//! Geometric primitives: `Point`, `Size`, `Rect`, `Insets`, corner radii.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate Euclidean distance to another point.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the bottom edge Y.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if a point is inside the rectangle (inclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Create a new rectangle inset by the given amount on all sides.
    ///
    /// Width and height floor at zero.
    #[must_use]
    pub fn inset(&self, amount: f32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            (self.width - 2.0 * amount).max(0.0),
            (self.height - 2.0 * amount).max(0.0),
        )
    }

    /// Scale the rectangle about its horizontal center and its bottom edge.
    ///
    /// Bars grow upward from their baseline, so width expands symmetrically
    /// while extra height is added at the top only.
    #[must_use]
    pub fn scaled_from_bottom(&self, width_scale: f32, height_scale: f32) -> Self {
        let scaled_width = self.width * width_scale;
        let scaled_height = self.height * height_scale;
        Self::new(
            self.x - (scaled_width - self.width) / 2.0,
            self.y - (scaled_height - self.height),
            scaled_width,
            scaled_height,
        )
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Pixel insets defining the content rectangle within an overall canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    /// Top inset
    pub top: f32,
    /// Right inset
    pub right: f32,
    /// Bottom inset
    pub bottom: f32,
    /// Left inset
    pub left: f32,
}

impl Insets {
    /// Create insets with individual values.
    #[must_use]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Uniform insets on all sides.
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Where a segment sits within a stack, for corner-rounding purposes.
///
/// Only the outward-facing edges of a stack are rounded: the bottom-most
/// segment rounds its bottom corners, the top-most its top corners, and
/// interior segments stay square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StackPosition {
    /// The only segment in the stack (rounds all corners).
    Only,
    /// Top-most segment.
    Top,
    /// Between other segments.
    Interior,
    /// Bottom-most segment.
    Bottom,
}

/// Corner radius specification for bars and stack segments.
///
/// A single scalar, a top/bottom pair, or four independent radii. Resolved
/// against a concrete rectangle (and stack position) into [`Corners`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CornerRadius {
    /// One radius applied per shape-specific rule.
    Uniform(f32),
    /// Separate radii for the top and bottom corner pairs.
    TopBottom {
        /// Radius for both top corners.
        top: f32,
        /// Radius for both bottom corners.
        bottom: f32,
    },
    /// Fully independent per-corner radii.
    Each {
        /// Top-left radius
        top_left: f32,
        /// Top-right radius
        top_right: f32,
        /// Bottom-left radius
        bottom_left: f32,
        /// Bottom-right radius
        bottom_right: f32,
    },
}

impl Default for CornerRadius {
    fn default() -> Self {
        Self::Uniform(0.0)
    }
}

impl CornerRadius {
    /// Resolve to concrete per-corner radii for a standalone shape.
    ///
    /// `Uniform` rounds all four corners. Radii are clamped so no corner
    /// exceeds half the smaller rectangle dimension.
    #[must_use]
    pub fn resolve(&self, width: f32, height: f32) -> Corners {
        self.resolve_for_stack(width, height, StackPosition::Only)
    }

    /// Resolve to concrete per-corner radii for a segment within a stack.
    ///
    /// `Uniform` rounds only the outward-facing edge for `Top` / `Bottom`
    /// positions and nothing for `Interior`; explicit pair/per-corner
    /// specifications are honored as given.
    #[must_use]
    pub fn resolve_for_stack(&self, width: f32, height: f32, position: StackPosition) -> Corners {
        let raw = match *self {
            Self::Uniform(r) => {
                let (top, bottom) = match position {
                    StackPosition::Only => (r, r),
                    StackPosition::Top => (r, 0.0),
                    StackPosition::Interior => (0.0, 0.0),
                    StackPosition::Bottom => (0.0, r),
                };
                Corners {
                    top_left: top,
                    top_right: top,
                    bottom_left: bottom,
                    bottom_right: bottom,
                }
            }
            Self::TopBottom { top, bottom } => Corners {
                top_left: top,
                top_right: top,
                bottom_left: bottom,
                bottom_right: bottom,
            },
            Self::Each {
                top_left,
                top_right,
                bottom_left,
                bottom_right,
            } => Corners {
                top_left,
                top_right,
                bottom_left,
                bottom_right,
            },
        };
        raw.clamped(width, height)
    }
}

/// Resolved per-corner radii, ready for path generation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Corners {
    /// Top-left radius
    pub top_left: f32,
    /// Top-right radius
    pub top_right: f32,
    /// Bottom-left radius
    pub bottom_left: f32,
    /// Bottom-right radius
    pub bottom_right: f32,
}

impl Corners {
    /// Zero radius on every corner.
    pub const ZERO: Self = Self {
        top_left: 0.0,
        top_right: 0.0,
        bottom_left: 0.0,
        bottom_right: 0.0,
    };

    /// Clamp every radius to half the smaller rectangle dimension.
    ///
    /// Guarantees no two opposing radii sum to more than the corresponding
    /// dimension.
    #[must_use]
    pub fn clamped(&self, width: f32, height: f32) -> Self {
        let max_radius = (width / 2.0).min(height / 2.0).max(0.0);
        Self {
            top_left: self.top_left.clamp(0.0, max_radius),
            top_right: self.top_right.clamp(0.0, max_radius),
            bottom_left: self.bottom_left.clamp(0.0, max_radius),
            bottom_right: self.bottom_right.clamp(0.0, max_radius),
        }
    }

    /// Shrink every radius by `amount` (for inset border outlines) and
    /// re-clamp to the inset rectangle, flooring at zero.
    #[must_use]
    pub fn inset(&self, amount: f32, inset_width: f32, inset_height: f32) -> Self {
        let max_radius = (inset_width / 2.0).min(inset_height / 2.0).max(0.0);
        let shrink = |r: f32| (r - amount).clamp(0.0, max_radius);
        Self {
            top_left: shrink(self.top_left),
            top_right: shrink(self.top_right),
            bottom_left: shrink(self.bottom_left),
            bottom_right: shrink(self.bottom_right),
        }
    }

    /// Check if all corners have zero radius.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.top_left == 0.0
            && self.top_right == 0.0
            && self.bottom_left == 0.0
            && self.bottom_right == 0.0
    }
}
