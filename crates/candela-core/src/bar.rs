//! Bar and stack-segment outline generation.
//!
//! Rounded-rectangle paths with independent per-corner radii, inset
//! border outlines, and the vertical layout of stacked segments.

use crate::geometry::{Corners, Rect, StackPosition};
use crate::path::Path;
use serde::{Deserialize, Serialize};

/// Closed outline for an axis-aligned rectangle with per-corner radii.
///
/// The path starts just right of the top-left corner and runs clockwise;
/// quarter-turn quadratics are emitted only for corners with a nonzero
/// radius. Radii are expected pre-clamped (see [`Corners::clamped`]).
#[must_use]
pub fn bar_path(rect: Rect, corners: Corners) -> Path {
    let Rect {
        x,
        y,
        width,
        height,
    } = rect;
    let mut path = Path::new();

    path.move_to(x + corners.top_left, y)
        .line_to(x + width - corners.top_right, y);
    if corners.top_right > 0.0 {
        path.quad_to(x + width, y, x + width, y + corners.top_right);
    }

    path.line_to(x + width, y + height - corners.bottom_right);
    if corners.bottom_right > 0.0 {
        path.quad_to(
            x + width,
            y + height,
            x + width - corners.bottom_right,
            y + height,
        );
    }

    path.line_to(x + corners.bottom_left, y + height);
    if corners.bottom_left > 0.0 {
        path.quad_to(x, y + height, x, y + height - corners.bottom_left);
    }

    path.line_to(x, y + corners.top_left);
    if corners.top_left > 0.0 {
        path.quad_to(x, y, x + corners.top_left, y);
    }

    path.close();
    path
}

/// Outline for a selection border stroked inside the bar.
///
/// The rectangle insets by half the stroke width so the stroke's outer
/// edge lands on the bar outline; each corner radius shrinks by the inset
/// and re-clamps to the inset rectangle, flooring at zero.
#[must_use]
pub fn border_path(rect: Rect, corners: Corners, stroke_width: f32) -> Path {
    let inset = stroke_width / 2.0;
    let inner = rect.inset(inset);
    let inner_corners = corners.inset(inset, inner.width, inner.height);
    bar_path(inner, inner_corners)
}

/// Vertical geometry of one segment within a stack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentBox {
    /// Top edge Y.
    pub y: f32,
    /// Segment height after gap insets.
    pub height: f32,
    /// Sum of segment heights strictly below this one (no gaps).
    pub below_height: f32,
    /// Start of this segment's share of the stack's reveal progress.
    pub reveal_start: f32,
    /// End of this segment's share of the stack's reveal progress.
    pub reveal_end: f32,
    /// Position within the stack for corner rounding.
    pub position: StackPosition,
}

/// Vertical layout of a full stack of segments.
///
/// Segment 0 sits at the bottom of the stack; the last segment at the
/// top. Segment heights derive from each value's share of the axis
/// maximum, then shrink proportionally so inter-segment gaps fit inside
/// the stack's total height. Reveal windows cover `[0, 1]` bottom-to-top
/// in proportion to height.
#[must_use]
pub fn stack_layout(
    values: &[f64],
    axis_max: f64,
    chart_top: f32,
    chart_height: f32,
    gap: f32,
) -> Vec<SegmentBox> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let value_height = |v: f64| -> f32 {
        if axis_max > 0.0 {
            ((v / axis_max) * f64::from(chart_height)) as f32
        } else {
            0.0
        }
    };

    let raw_heights: Vec<f32> = values.iter().map(|&v| value_height(v)).collect();
    let total_height: f32 = raw_heights.iter().sum();
    let total_gaps = (n - 1) as f32 * gap;
    let segment_scale = if total_height > 0.0 {
        (total_height - total_gaps).max(0.0) / total_height
    } else {
        0.0
    };

    let baseline = chart_top + chart_height;
    let mut below_height = 0.0f32;
    let mut boxes = Vec::with_capacity(n);
    for (i, raw) in raw_heights.iter().enumerate() {
        let height = raw * segment_scale;
        let y = baseline - below_height - i as f32 * gap - height;
        let (reveal_start, reveal_end) = if total_height > 0.0 {
            let start = (below_height + i as f32 * gap) / total_height;
            (start.min(1.0), (start + height / total_height).min(1.0))
        } else {
            (0.0, 0.0)
        };
        let position = match (i, n) {
            (_, 1) => StackPosition::Only,
            (0, _) => StackPosition::Bottom,
            (i, n) if i == n - 1 => StackPosition::Top,
            _ => StackPosition::Interior,
        };
        boxes.push(SegmentBox {
            y,
            height,
            below_height,
            reveal_start,
            reveal_end,
            position,
        });
        below_height += height;
    }
    boxes
}

/// Upward translation keeping a stack contiguous under whole-stack
/// selection: a segment shifts by the scale-induced growth of everything
/// below it.
#[must_use]
pub fn stack_selection_offset(below_height: f32, height_scale: f32, progress: f32) -> f32 {
    below_height * (height_scale - 1.0) * progress.clamp(0.0, 1.0)
}
