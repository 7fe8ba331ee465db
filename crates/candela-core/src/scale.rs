//! Axis scaling and chart-area layout.
//!
//! Maps raw data ranges to "nice" human-friendly axis bounds, data points
//! to screen coordinates (and back), and category counts to per-item slot
//! positions.

use crate::geometry::Insets;
use serde::{Deserialize, Serialize};

/// Nice axis bounds and tick spacing derived from a raw data range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    /// Rounded-down lower bound (≤ the raw minimum).
    pub min: f64,
    /// Rounded-up upper bound (≥ the raw maximum).
    pub max: f64,
    /// Tick spacing.
    pub interval: f64,
}

impl AxisScale {
    /// Number of intervals between `min` and `max`.
    #[must_use]
    pub fn tick_count(&self) -> usize {
        if self.interval <= 0.0 {
            return 0;
        }
        ((self.max - self.min) / self.interval).round() as usize
    }

    /// Evenly spaced tick positions from `min` to `max` inclusive.
    #[must_use]
    pub fn tick_values(&self) -> Vec<f64> {
        let count = self.tick_count();
        (0..=count)
            .map(|i| self.min + self.interval * i as f64)
            .collect()
    }
}

/// Nice multipliers for axis intervals, snapped upward.
const NICE_INTERVALS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Nice multipliers for a value-axis maximum on bar charts.
const NICE_MAXIMA: [f64; 11] = [1.0, 1.2, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0];

/// Compute nice axis bounds and interval for a raw range.
///
/// The rough interval `(max − min) / tick_count` is snapped up to the
/// nearest of 1, 2, 2.5, 5, 10 times its power of ten; bounds round
/// outward to interval multiples. A degenerate range (zero width,
/// non-finite, or all-zero data) falls back to a unit range so the result
/// is always usable.
#[must_use]
pub fn nice_scale(min: f64, max: f64, tick_count: usize) -> AxisScale {
    let tick_count = tick_count.max(1);
    let (min, max) = if max - min > 0.0 && (max - min).is_finite() {
        (min, max)
    } else if min.is_finite() {
        (min, min + 1.0)
    } else {
        (0.0, 1.0)
    };

    let rough_interval = (max - min) / tick_count as f64;
    let magnitude = 10f64.powf(rough_interval.log10().floor());
    let normalized = rough_interval / magnitude;

    let multiplier = NICE_INTERVALS
        .iter()
        .copied()
        .find(|&m| normalized <= m)
        .unwrap_or(10.0);
    let interval = multiplier * magnitude;

    AxisScale {
        min: (min / interval).floor() * interval,
        max: (max / interval).ceil() * interval,
        interval,
    }
}

/// Snap a bar-chart value maximum up to a nice number.
///
/// Bar value axes run from zero, so only the maximum is rounded; zero (or
/// negative) data maps to a fallback of 10.
#[must_use]
pub fn nice_axis_max(max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 10.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    let multiplier = NICE_MAXIMA
        .iter()
        .copied()
        .find(|&m| normalized <= m)
        .unwrap_or(10.0);
    multiplier * magnitude
}

/// A data point mapped into pixel space.
///
/// `data_index` back-references the source point; −1 marks a synthesized
/// point (e.g. an interpolated explorer position).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    /// Screen X in pixels.
    pub x: f32,
    /// Screen Y in pixels.
    pub y: f32,
    /// Index of the source data point, or −1.
    pub data_index: i32,
}

impl ScreenPoint {
    /// Create a screen point bound to a source index.
    #[must_use]
    pub const fn new(x: f32, y: f32, data_index: i32) -> Self {
        Self { x, y, data_index }
    }

    /// Create a synthesized screen point (no source index).
    #[must_use]
    pub const fn synthetic(x: f32, y: f32) -> Self {
        Self::new(x, y, -1)
    }
}

/// Data-space bounds for coordinate mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataRange {
    /// Minimum X
    pub min_x: f64,
    /// Maximum X
    pub max_x: f64,
    /// Minimum Y
    pub min_y: f64,
    /// Maximum Y
    pub max_y: f64,
}

impl DataRange {
    /// Create a range from explicit bounds.
    #[must_use]
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// X span, treating an empty span as 1 to avoid division by zero.
    #[must_use]
    pub fn span_x(&self) -> f64 {
        let span = self.max_x - self.min_x;
        if span == 0.0 {
            1.0
        } else {
            span
        }
    }

    /// Y span, treating an empty span as 1 to avoid division by zero.
    #[must_use]
    pub fn span_y(&self) -> f64 {
        let span = self.max_y - self.min_y;
        if span == 0.0 {
            1.0
        } else {
            span
        }
    }
}

/// Canvas size and content insets for a single chart render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    /// Overall canvas width.
    pub width: f32,
    /// Overall canvas height.
    pub height: f32,
    /// Content-rectangle insets.
    pub insets: Insets,
}

impl ChartFrame {
    /// Create a frame.
    #[must_use]
    pub const fn new(width: f32, height: f32, insets: Insets) -> Self {
        Self {
            width,
            height,
            insets,
        }
    }

    /// Width of the content rectangle.
    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.width - self.insets.left - self.insets.right
    }

    /// Height of the content rectangle.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.height - self.insets.top - self.insets.bottom
    }

    /// Screen Y of the content rectangle's bottom edge (the baseline for
    /// bars and areas).
    #[must_use]
    pub fn baseline_y(&self) -> f32 {
        self.insets.top + self.content_height()
    }

    /// Map a data point into the content rectangle.
    ///
    /// X normalizes linearly over the range; Y inverts (screen Y grows
    /// downward, data Y grows upward).
    #[must_use]
    pub fn data_to_screen(&self, x: f64, y: f64, range: &DataRange) -> ScreenPoint {
        let normalized_x = (x - range.min_x) / range.span_x();
        let normalized_y = (y - range.min_y) / range.span_y();

        let screen_x = f64::from(self.insets.left) + normalized_x * f64::from(self.content_width());
        let screen_y = f64::from(self.insets.top) + f64::from(self.content_height())
            - normalized_y * f64::from(self.content_height());

        ScreenPoint::synthetic(screen_x as f32, screen_y as f32)
    }

    /// Exact inverse of [`ChartFrame::data_to_screen`].
    #[must_use]
    pub fn screen_to_data(&self, screen_x: f32, screen_y: f32, range: &DataRange) -> (f64, f64) {
        let normalized_x =
            (f64::from(screen_x) - f64::from(self.insets.left)) / f64::from(self.content_width());
        let normalized_y = 1.0
            - (f64::from(screen_y) - f64::from(self.insets.top)) / f64::from(self.content_height());

        (
            range.min_x + normalized_x * range.span_x(),
            range.min_y + normalized_y * range.span_y(),
        )
    }
}

/// Per-item widths and offsets for evenly spaced categories, bars, or
/// grouped bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotLayout {
    /// Number of items.
    pub count: usize,
    /// Width of each item.
    pub item_width: f32,
    /// Gap between adjacent items.
    pub gap: f32,
}

impl SlotLayout {
    /// Left-edge offset of item `index` relative to the layout origin.
    #[must_use]
    pub fn offset(&self, index: usize) -> f32 {
        index as f32 * (self.item_width + self.gap)
    }
}

/// Divide an available width among `count` items separated by `gap`.
///
/// Item width is `(available − (count−1)·gap) / count`, floored at zero
/// when the gaps consume all available space. The same formula recurses
/// one level for bars within a grouped category.
#[must_use]
pub fn slot_layout(count: usize, available: f32, gap: f32) -> SlotLayout {
    if count == 0 {
        return SlotLayout {
            count: 0,
            item_width: 0.0,
            gap,
        };
    }
    let total_gaps = (count - 1) as f32 * gap;
    SlotLayout {
        count,
        item_width: ((available - total_gaps) / count as f32).max(0.0),
        gap,
    }
}
