//! Radial charts: segmented rings, donuts, semicircles, and gauges.

use crate::data::RadialSegment;
use crate::scene::Scene;
use crate::validate::{validate_radial, DataError, ValidationWarning};
use candela_core::hittest::{hit_radial_segment, hit_ring_width};
use candela_core::radial::{
    expand_sector, radial_layout, sector_path, ArcSector, RadialLayout, RadialLayoutConfig,
    SelectionExpand,
};
use candela_core::reveal::{local_progress, Easing};
use candela_core::{Color, Point};
use serde::{Deserialize, Serialize};

/// The default background ring color for semicircle charts and gauges.
fn default_track_color() -> Color {
    Color::new(0.949, 0.949, 0.969, 1.0)
}

/// A radial chart: values as arcs of an annulus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialChart {
    segments: Vec<RadialSegment>,
    max_value: Option<f64>,
    size: f32,
    stroke_width: f32,
    corner_radius: f32,
    segment_gap: f32,
    background: Option<Color>,
    start_angle: f32,
    sweep_angle: f32,
    closed_loop: bool,
    selected: Option<usize>,
    stroke_increase: f32,
    expand_mode: SelectionExpand,
    hit_padding: f32,
    easing: Easing,
    #[serde(skip)]
    warnings: Vec<ValidationWarning>,
}

impl RadialChart {
    /// Build a radial chart, validating the segments.
    ///
    /// # Errors
    ///
    /// Rejects non-finite values, identifying the offending segment.
    pub fn new(segments: Vec<RadialSegment>) -> Result<Self, DataError> {
        let warnings = validate_radial(&segments)?;
        Ok(Self {
            segments,
            max_value: None,
            size: 280.0,
            stroke_width: 40.0,
            corner_radius: 8.0,
            segment_gap: 0.0,
            background: None,
            start_angle: -90.0,
            sweep_angle: 360.0,
            closed_loop: false,
            selected: None,
            stroke_increase: 15.0,
            expand_mode: SelectionExpand::Scale,
            hit_padding: 20.0,
            easing: Easing::STANDARD,
            warnings,
        })
    }

    /// A donut: full closed ring starting at 12 o'clock.
    ///
    /// # Errors
    ///
    /// Same contract as [`RadialChart::new`].
    pub fn donut(segments: Vec<RadialSegment>) -> Result<Self, DataError> {
        Ok(Self::new(segments)?
            .ring(260.0, 34.0)
            .angles(-90.0, 360.0)
            .closed_loop(true))
    }

    /// A semicircle opening upward.
    ///
    /// # Errors
    ///
    /// Same contract as [`RadialChart::new`].
    pub fn semicircle(segments: Vec<RadialSegment>) -> Result<Self, DataError> {
        Ok(Self::new(segments)?
            .angles(-180.0, 180.0)
            .background(default_track_color()))
    }

    /// A single-value gauge over a background track.
    ///
    /// `progress` is a percentage clamped to [0, 100].
    ///
    /// # Errors
    ///
    /// Rejects a non-finite progress value.
    pub fn gauge(progress: f64, color: Color) -> Result<Self, DataError> {
        let clamped = if progress.is_finite() {
            progress.clamp(0.0, 100.0)
        } else {
            return Err(DataError::NonFinite {
                index: 0,
                field: "value",
            });
        };
        Ok(Self::new(vec![RadialSegment::new(clamped, color)])?
            .max_value(100.0)
            .background(default_track_color()))
    }

    /// A donut-shaped gauge.
    ///
    /// # Errors
    ///
    /// Same contract as [`RadialChart::gauge`].
    pub fn donut_gauge(progress: f64, color: Color) -> Result<Self, DataError> {
        Ok(Self::gauge(progress, color)?
            .ring(260.0, 34.0)
            .closed_loop(true))
    }

    /// A semicircular gauge.
    ///
    /// # Errors
    ///
    /// Same contract as [`RadialChart::gauge`].
    pub fn semicircle_gauge(progress: f64, color: Color) -> Result<Self, DataError> {
        Ok(Self::gauge(progress, color)?.angles(-180.0, 180.0))
    }

    /// Overall diameter and ring thickness.
    #[must_use]
    pub const fn ring(mut self, size: f32, stroke_width: f32) -> Self {
        self.size = size;
        self.stroke_width = stroke_width;
        self
    }

    /// Start angle and total sweep, degrees clockwise from +X.
    #[must_use]
    pub const fn angles(mut self, start: f32, sweep: f32) -> Self {
        self.start_angle = start;
        self.sweep_angle = sweep;
        self
    }

    /// End-cap corner radius.
    #[must_use]
    pub const fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Gap between segments, in degrees.
    #[must_use]
    pub const fn segment_gap(mut self, degrees: f32) -> Self {
        self.segment_gap = degrees;
        self
    }

    /// Background ring color for the uncovered sweep.
    #[must_use]
    pub const fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Count a trailing gap back to the first segment (full rings).
    #[must_use]
    pub const fn closed_loop(mut self, closed: bool) -> Self {
        self.closed_loop = closed;
        self
    }

    /// Value at which segments fill the whole sweep.
    #[must_use]
    pub const fn max_value(mut self, max: f64) -> Self {
        self.max_value = Some(max);
        self
    }

    /// Select a segment (or clear with `None`).
    #[must_use]
    pub const fn select(mut self, index: Option<usize>) -> Self {
        self.selected = index;
        self
    }

    /// Stroke-width growth of the selected segment.
    #[must_use]
    pub const fn stroke_increase(mut self, increase: f32) -> Self {
        self.stroke_increase = increase;
        self
    }

    /// How the selected segment grows.
    #[must_use]
    pub const fn expand_mode(mut self, mode: SelectionExpand) -> Self {
        self.expand_mode = mode;
        self
    }

    /// Extra tappable ring width beyond the visible stroke.
    #[must_use]
    pub const fn hit_padding(mut self, padding: f32) -> Self {
        self.hit_padding = padding;
        self
    }

    /// Entrance easing.
    #[must_use]
    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Warnings collected at construction.
    #[must_use]
    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    /// The segments.
    #[must_use]
    pub fn segments(&self) -> &[RadialSegment] {
        &self.segments
    }

    /// Canvas edge length: the configured size plus room for selection
    /// expansion on both sides.
    #[must_use]
    pub fn effective_size(&self) -> f32 {
        self.size + self.stroke_increase
    }

    /// Ring center in canvas coordinates.
    #[must_use]
    pub fn center(&self) -> Point {
        let c = self.effective_size() / 2.0;
        Point::new(c, c)
    }

    /// Mean ring radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        (self.size - self.stroke_width) / 2.0
    }

    /// Angular layout of the segments (plus background remainder).
    #[must_use]
    pub fn layout(&self) -> RadialLayout {
        let values: Vec<f64> = self.segments.iter().map(|s| s.value).collect();
        radial_layout(
            &values,
            &RadialLayoutConfig {
                start_angle: self.start_angle,
                sweep_angle: self.sweep_angle,
                gap_degrees: self.segment_gap,
                closed_loop: self.closed_loop,
                max_value: self.max_value,
                background: self.background.is_some(),
            },
        )
    }

    fn sector(&self, start_angle: f32, sweep_angle: f32) -> ArcSector {
        let center = self.center();
        ArcSector {
            cx: center.x,
            cy: center.y,
            radius: self.radius(),
            stroke_width: self.stroke_width,
            start_angle,
            sweep_angle,
            corner_radius: self.corner_radius,
        }
    }

    /// Produce the display list for one frame.
    ///
    /// Segments reveal sequentially around the ring: each owns a window
    /// of the global progress proportional to its value share.
    #[must_use]
    pub fn render(&self, progress: f32, selection_progress: f32) -> Scene {
        let mut scene = Scene::new();
        let layout = self.layout();
        let eased = self.easing.apply(progress);
        let has_gap = self.segment_gap > 0.0;

        // Without gaps the background is a static track under the
        // segments; with gaps it is laid out and revealed like one more
        // segment.
        if let Some(track) = self.background {
            if !has_gap && layout.background.is_some() {
                scene.fill(
                    sector_path(&self.sector(self.start_angle, self.sweep_angle)),
                    track,
                );
            }
        }

        for (index, slice) in layout.slices.iter().enumerate() {
            let local = local_progress(eased, slice.reveal_start, slice.reveal_end);
            let sweep = slice.sweep_angle * local;
            let mut sector = self.sector(slice.start_angle, sweep);
            if self.selected == Some(index) {
                sector = expand_sector(
                    &sector,
                    self.stroke_increase,
                    self.expand_mode,
                    selection_progress,
                );
            }
            scene.fill(sector_path(&sector), self.segments[index].color);
        }

        if let (Some(track), Some(slice), true) = (self.background, layout.background, has_gap) {
            let local = local_progress(eased, slice.reveal_start, slice.reveal_end);
            let sector = self.sector(slice.start_angle, slice.sweep_angle * local);
            scene.fill(sector_path(&sector), track);
        }

        scene
    }

    /// Resolve a press to a segment index.
    ///
    /// The tappable ring is the padded base stroke or the
    /// selection-expanded stroke, whichever is wider.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        let ring_width = hit_ring_width(
            self.stroke_width,
            self.hit_padding,
            self.stroke_width + self.stroke_increase,
        );
        let center = self.center();
        let layout = self.layout();
        hit_radial_segment(
            point,
            center.x,
            center.y,
            self.radius(),
            ring_width,
            &layout.slices,
        )
    }
}
