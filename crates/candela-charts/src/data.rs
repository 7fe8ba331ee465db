//! Chart input data and selection styling.

use candela_core::{Color, CornerRadius};
use serde::{Deserialize, Serialize};

/// One point of a line or area chart.
///
/// X values must be monotonically non-decreasing across the series; the
/// nearest-point search depends on it and construction rejects unsorted
/// input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// X value.
    pub x: f64,
    /// Y value.
    pub y: f64,
    /// Optional display label.
    pub label: Option<String>,
}

impl DataPoint {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, label: None }
    }

    /// Attach a label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// One bar: a flat bar, one bar of a grouped set, or the datum behind a
/// stack segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDatum {
    /// Bar value. Negative values warn and render degenerately.
    pub value: f64,
    /// Fill color.
    pub color: Color,
    /// Optional display label.
    pub label: Option<String>,
    /// Per-item selection styling override.
    pub selection: Option<ItemSelectionStyle>,
}

impl BarDatum {
    /// Create a bar datum.
    #[must_use]
    pub const fn new(value: f64, color: Color) -> Self {
        Self {
            value,
            color,
            label: None,
            selection: None,
        }
    }

    /// Attach a label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Override selection styling for this item.
    #[must_use]
    pub fn selection(mut self, style: ItemSelectionStyle) -> Self {
        self.selection = Some(style);
        self
    }
}

/// One segment of a stacked bar. Segment 0 sits at the bottom of the
/// stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackSegment {
    /// Segment value; the stack total is the sum over segments.
    pub value: f64,
    /// Fill color.
    pub color: Color,
    /// Optional display label.
    pub label: Option<String>,
    /// Per-segment corner radius override. Without one, only the stack's
    /// outward-facing edges round.
    pub corner_radius: Option<CornerRadius>,
    /// Per-item selection styling override.
    pub selection: Option<ItemSelectionStyle>,
}

impl StackSegment {
    /// Create a stack segment.
    #[must_use]
    pub const fn new(value: f64, color: Color) -> Self {
        Self {
            value,
            color,
            label: None,
            corner_radius: None,
            selection: None,
        }
    }

    /// Attach a label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Override the corner radius for this segment alone.
    #[must_use]
    pub const fn corner_radius(mut self, radius: CornerRadius) -> Self {
        self.corner_radius = Some(radius);
        self
    }
}

/// One category of a grouped/stacked bar chart.
///
/// The original prop shape discriminated grouped from stacked data by
/// probing for a `bars` or `stack` key at every use site; here the
/// distinction is a tag resolved once at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Category {
    /// Side-by-side bars sharing a category slot.
    Grouped {
        /// Category label.
        label: String,
        /// Bars, left to right.
        bars: Vec<BarDatum>,
    },
    /// A single stacked bar.
    Stacked {
        /// Category label.
        label: String,
        /// Segments, bottom to top.
        stack: Vec<StackSegment>,
    },
}

impl Category {
    /// Create a grouped category.
    #[must_use]
    pub fn grouped(label: impl Into<String>, bars: Vec<BarDatum>) -> Self {
        Self::Grouped {
            label: label.into(),
            bars,
        }
    }

    /// Create a stacked category.
    #[must_use]
    pub fn stacked(label: impl Into<String>, stack: Vec<StackSegment>) -> Self {
        Self::Stacked {
            label: label.into(),
            stack,
        }
    }

    /// The category label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Grouped { label, .. } | Self::Stacked { label, .. } => label,
        }
    }
}

/// One segment of a radial chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialSegment {
    /// Segment value; sweep is proportional to its share of the maximum.
    pub value: f64,
    /// Fill color.
    pub color: Color,
    /// Optional display label.
    pub label: Option<String>,
}

impl RadialSegment {
    /// Create a radial segment.
    #[must_use]
    pub const fn new(value: f64, color: Color) -> Self {
        Self {
            value,
            color,
            label: None,
        }
    }

    /// Attach a label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Selection border drawn inset inside a bar or segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderStyle {
    /// Stroke width.
    pub width: f32,
    /// Stroke color.
    pub color: Color,
    /// Fade the border with the selection progress instead of snapping.
    pub animate: bool,
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self {
            width: 2.0,
            color: Color::BLACK,
            animate: true,
        }
    }
}

/// Per-item override of the chart-level selection styling.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemSelectionStyle {
    /// Replacement fill while selected.
    pub color: Option<Color>,
    /// Border override.
    pub border: Option<BorderStyle>,
}

/// Chart-level selection styling for bar charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionStyle {
    /// Fill the selected item with this color (lerped in by selection
    /// progress).
    pub color: Option<Color>,
    /// Horizontal scale factor of the selected item.
    pub width_scale: f32,
    /// Vertical scale factor of the selected item.
    pub height_scale: f32,
    /// Inset border around the selected item.
    pub border: Option<BorderStyle>,
    /// Select and scale the whole stack rather than one segment.
    pub apply_to_whole_stack: bool,
}

impl Default for SelectionStyle {
    fn default() -> Self {
        Self {
            color: None,
            width_scale: 1.0,
            height_scale: 1.0,
            border: None,
            apply_to_whole_stack: false,
        }
    }
}

impl SelectionStyle {
    /// Uniform scale factor for both dimensions.
    #[must_use]
    pub const fn scale(mut self, factor: f32) -> Self {
        self.width_scale = factor;
        self.height_scale = factor;
        self
    }

    /// Effective scale factors at a selection progress.
    #[must_use]
    pub fn scales_at(&self, progress: f32) -> (f32, f32) {
        let p = progress.clamp(0.0, 1.0);
        (
            1.0 + (self.width_scale - 1.0) * p,
            1.0 + (self.height_scale - 1.0) * p,
        )
    }
}
