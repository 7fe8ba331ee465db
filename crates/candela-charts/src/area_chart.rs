//! Line and area charts with explorer scrubbing.

use crate::data::DataPoint;
use crate::scene::Scene;
use crate::validate::{validate_points, DataError, ValidationWarning};
use candela_core::curve::{
    apply_progress, area_path, downsample, effective_kind, interpolate_y_at_x,
    interpolate_y_at_x_smooth, line_path, split_at_index, CurveKind, MAX_RENDER_POINTS,
};
use candela_core::hittest::nearest_point_index;
use candela_core::reveal::Easing;
use candela_core::scale::{nice_scale, AxisScale, DataRange, ScreenPoint};
use candela_core::{ChartFrame, Color, Insets, Point};
use serde::{Deserialize, Serialize};

/// Explorer (scrub) rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Snap the indicator to the nearest data point instead of tracking
    /// the finger freely.
    pub snap_to_point: bool,
    /// Draw the vertical indicator line.
    pub show_line: bool,
    /// Draw the indicator dot on the curve.
    pub show_dot: bool,
    /// Indicator line color; the stroke color when unset.
    pub line_color: Option<Color>,
    /// Indicator line width.
    pub line_width: f32,
    /// Indicator dot color; the stroke color when unset.
    pub dot_color: Option<Color>,
    /// Indicator dot radius.
    pub dot_radius: f32,
    /// Color for the de-emphasized portion right of the scrub; when
    /// unset the normal colors dim to 30% opacity.
    pub inactive_color: Option<Color>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            snap_to_point: true,
            show_line: true,
            show_dot: true,
            line_color: None,
            line_width: 2.0,
            dot_color: None,
            dot_radius: 6.0,
            inactive_color: None,
        }
    }
}

/// An area chart (or, without a fill, a line chart).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaChart {
    data: Vec<DataPoint>,
    width: f32,
    height: f32,
    fill: Option<Color>,
    stroke: Color,
    stroke_width: f32,
    curve: CurveKind,
    show_points: bool,
    point_radius: f32,
    point_color: Option<Color>,
    selected_point: Option<usize>,
    selected_point_radius: f32,
    x_axis: bool,
    y_axis: bool,
    axis_ticks: usize,
    grid: bool,
    grid_color: Color,
    min_x: Option<f64>,
    max_x: Option<f64>,
    min_y: Option<f64>,
    max_y: Option<f64>,
    explorer: Option<ExplorerConfig>,
    easing: Easing,
    #[serde(skip)]
    warnings: Vec<ValidationWarning>,
}

impl AreaChart {
    /// Build an area chart, validating the data.
    ///
    /// # Errors
    ///
    /// Rejects non-finite coordinates and X values that go backwards.
    pub fn new(data: Vec<DataPoint>) -> Result<Self, DataError> {
        let warnings = validate_points(&data)?;
        Ok(Self {
            data,
            width: 320.0,
            height: 200.0,
            fill: Some(Color::new(0.494, 0.851, 0.341, 0.25)),
            stroke: Color::new(0.494, 0.851, 0.341, 1.0),
            stroke_width: 2.0,
            curve: CurveKind::Monotone,
            show_points: false,
            point_radius: 4.0,
            point_color: None,
            selected_point: None,
            selected_point_radius: 8.0,
            x_axis: true,
            y_axis: true,
            axis_ticks: 4,
            grid: false,
            grid_color: Color::new(0.898, 0.906, 0.922, 1.0),
            min_x: None,
            max_x: None,
            min_y: None,
            max_y: None,
            explorer: None,
            easing: Easing::STANDARD,
            warnings,
        })
    }

    /// Build a line chart: an area chart without the fill.
    ///
    /// # Errors
    ///
    /// Same contract as [`AreaChart::new`].
    pub fn line(data: Vec<DataPoint>) -> Result<Self, DataError> {
        Ok(Self::new(data)?.fill(None))
    }

    /// Canvas size.
    #[must_use]
    pub const fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Fill color under the curve, or `None` for a stroke-only line.
    #[must_use]
    pub const fn fill(mut self, fill: Option<Color>) -> Self {
        self.fill = fill;
        self
    }

    /// Stroke color and width.
    #[must_use]
    pub const fn stroke(mut self, color: Color, width: f32) -> Self {
        self.stroke = color;
        self.stroke_width = width;
        self
    }

    /// Curve interpolation mode.
    #[must_use]
    pub const fn curve(mut self, kind: CurveKind) -> Self {
        self.curve = kind;
        self
    }

    /// Draw point markers during explorer scrubs.
    #[must_use]
    pub const fn show_points(mut self, show: bool) -> Self {
        self.show_points = show;
        self
    }

    /// Marker radius.
    #[must_use]
    pub const fn point_radius(mut self, radius: f32) -> Self {
        self.point_radius = radius;
        self
    }

    /// Marker color; the stroke color when unset.
    #[must_use]
    pub const fn point_color(mut self, color: Color) -> Self {
        self.point_color = Some(color);
        self
    }

    /// Select a point (or clear with `None`).
    #[must_use]
    pub const fn select(mut self, index: Option<usize>) -> Self {
        self.selected_point = index;
        self
    }

    /// Show or hide the X axis reservation.
    #[must_use]
    pub const fn x_axis(mut self, show: bool) -> Self {
        self.x_axis = show;
        self
    }

    /// Show or hide the Y axis reservation.
    #[must_use]
    pub const fn y_axis(mut self, show: bool) -> Self {
        self.y_axis = show;
        self
    }

    /// Number of value-axis intervals.
    #[must_use]
    pub const fn axis_ticks(mut self, ticks: usize) -> Self {
        self.axis_ticks = ticks;
        self
    }

    /// Draw horizontal grid lines.
    #[must_use]
    pub const fn grid(mut self, show: bool) -> Self {
        self.grid = show;
        self
    }

    /// Pin the X range instead of deriving it from the data.
    #[must_use]
    pub const fn x_range(mut self, min: f64, max: f64) -> Self {
        self.min_x = Some(min);
        self.max_x = Some(max);
        self
    }

    /// Pin the Y range instead of deriving it from the data.
    #[must_use]
    pub const fn y_range(mut self, min: f64, max: f64) -> Self {
        self.min_y = Some(min);
        self.max_y = Some(max);
        self
    }

    /// Enable the explorer interaction.
    #[must_use]
    pub const fn explorer(mut self, config: ExplorerConfig) -> Self {
        self.explorer = Some(config);
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

    /// The point data.
    #[must_use]
    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    /// Canvas frame with the chart-area insets.
    #[must_use]
    pub fn frame(&self) -> ChartFrame {
        let bottom = if self.x_axis { 30.0 } else { 10.0 };
        let left = if self.y_axis { 40.0 } else { 10.0 };
        ChartFrame::new(self.width, self.height, Insets::new(10.0, 10.0, bottom, left))
    }

    /// Nice Y scale over the (10%-padded) data range.
    #[must_use]
    pub fn y_scale(&self) -> AxisScale {
        let data_min = self.min_y.unwrap_or_else(|| {
            self.data.iter().map(|p| p.y).fold(f64::INFINITY, f64::min)
        });
        let data_max = self.max_y.unwrap_or_else(|| {
            self.data
                .iter()
                .map(|p| p.y)
                .fold(f64::NEG_INFINITY, f64::max)
        });
        let (data_min, data_max) = if data_min.is_finite() && data_max.is_finite() {
            (data_min, data_max)
        } else {
            (0.0, 1.0)
        };
        let padding = (data_max - data_min) * 0.1;
        nice_scale(data_min - padding, data_max + padding, self.axis_ticks)
    }

    /// Data-space bounds used for coordinate mapping: raw X extent, nice
    /// Y bounds.
    #[must_use]
    pub fn data_range(&self) -> DataRange {
        let min_x = self.min_x.unwrap_or_else(|| {
            self.data.iter().map(|p| p.x).fold(f64::INFINITY, f64::min)
        });
        let max_x = self.max_x.unwrap_or_else(|| {
            self.data
                .iter()
                .map(|p| p.x)
                .fold(f64::NEG_INFINITY, f64::max)
        });
        let (min_x, max_x) = if min_x.is_finite() && max_x.is_finite() {
            (min_x, max_x)
        } else {
            (0.0, 1.0)
        };
        let scale = self.y_scale();
        DataRange::new(min_x, max_x, scale.min, scale.max)
    }

    /// The data mapped into screen space.
    #[must_use]
    pub fn screen_points(&self) -> Vec<ScreenPoint> {
        let frame = self.frame();
        let range = self.data_range();
        self.data
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let mapped = frame.data_to_screen(p.x, p.y, &range);
                ScreenPoint::new(mapped.x, mapped.y, i as i32)
            })
            .collect()
    }

    /// Points as rendered: downsampled, entrance progress applied.
    fn animated_points(&self, progress: f32) -> (Vec<ScreenPoint>, CurveKind) {
        let rendered = downsample(&self.screen_points(), MAX_RENDER_POINTS);
        let kind = effective_kind(self.curve, rendered.len());
        let eased = self.easing.apply(progress);
        (
            apply_progress(&rendered, self.frame().baseline_y(), eased),
            kind,
        )
    }

    fn grid_shapes(&self, scene: &mut Scene) {
        if !self.grid {
            return;
        }
        let frame = self.frame();
        let ticks = self.axis_ticks.max(1);
        for i in 0..=ticks {
            let y = frame.insets.top + (i as f32 / ticks as f32) * frame.content_height();
            scene.line(
                Point::new(frame.insets.left, y),
                Point::new(self.width - frame.insets.right, y),
                self.grid_color,
                1.0,
                0.3,
            );
        }
    }

    /// Produce the display list for one frame.
    #[must_use]
    pub fn render(&self, progress: f32) -> Scene {
        let mut scene = Scene::new();
        if self.data.is_empty() {
            return scene;
        }
        self.grid_shapes(&mut scene);

        let frame = self.frame();
        let (points, kind) = self.animated_points(progress);

        if let Some(fill) = self.fill {
            scene.fill(area_path(&points, kind, frame.baseline_y()), fill);
        }
        scene.stroke(line_path(&points, kind), self.stroke, self.stroke_width);

        if self.show_points {
            if let Some(selected) = self.selected_point {
                if let Some(p) = self.screen_points().get(selected) {
                    scene.circle(
                        Point::new(p.x, p.y),
                        self.selected_point_radius,
                        self.point_color.unwrap_or(self.stroke),
                        0.8,
                    );
                }
            }
        }

        scene
    }

    /// Produce the display list while the explorer is scrubbing at
    /// `explorer_x` (chart-local pixels).
    ///
    /// The curve splits into an active portion left of the scrub and a
    /// de-emphasized remainder; an indicator line and dot mark the scrub
    /// position, snapped to the nearest point or interpolated on the
    /// curve.
    #[must_use]
    pub fn render_with_explorer(&self, progress: f32, explorer_x: f32) -> Scene {
        let Some(config) = self.explorer else {
            return self.render(progress);
        };
        let mut scene = Scene::new();
        if self.data.is_empty() {
            return scene;
        }
        self.grid_shapes(&mut scene);

        let frame = self.frame();
        let baseline = frame.baseline_y();
        let (points, kind) = self.animated_points(progress);
        let screen = self.screen_points();

        let clamped_x = explorer_x.clamp(screen[0].x, screen[screen.len() - 1].x);
        let nearest = nearest_point_index(clamped_x, &screen).unwrap_or(0);
        let clip_x = if config.snap_to_point {
            screen[nearest].x
        } else {
            clamped_x
        };

        let inactive_stroke = config.inactive_color.unwrap_or(self.stroke);
        let inactive_opacity = if config.inactive_color.is_some() { 1.0 } else { 0.3 };

        // Snapped scrubs split at the shared data point; free scrubs
        // synthesize a boundary point on the curve at the scrub X.
        let split_point = points.iter().position(|p| p.x == clip_x);
        let (active_area, inactive_area, active_line, inactive_line) = match split_point {
            Some(index) => {
                let (a_fill, i_fill) = split_at_index(&points, index, kind, Some(baseline));
                let (a_line, i_line) = split_at_index(&points, index, kind, None);
                (a_fill, i_fill, a_line, i_line)
            }
            None => {
                let (active, inactive) = self.split_at_x(&points, clip_x, kind);
                (
                    area_path(&active, kind, baseline),
                    area_path(&inactive, kind, baseline),
                    line_path(&active, kind),
                    line_path(&inactive, kind),
                )
            }
        };

        if let Some(fill) = self.fill {
            let inactive_fill = config.inactive_color.unwrap_or(fill);
            scene.fill(active_area, fill);
            scene.fill_with_opacity(inactive_area, inactive_fill, inactive_opacity);
        }
        scene.stroke(active_line, self.stroke, self.stroke_width);
        scene.stroke_with_opacity(
            inactive_line,
            inactive_stroke,
            self.stroke_width,
            inactive_opacity,
        );

        if self.show_points {
            let marker_color = self.point_color.unwrap_or(self.stroke);
            let inactive_marker = config.inactive_color.unwrap_or(marker_color);
            for p in &points {
                let (color, opacity) = if p.x <= clip_x {
                    (marker_color, 1.0)
                } else {
                    (inactive_marker, inactive_opacity)
                };
                scene.circle(Point::new(p.x, p.y), self.point_radius, color, opacity);
            }
        }

        if config.show_line {
            scene.line(
                Point::new(clip_x, frame.insets.top),
                Point::new(clip_x, baseline),
                config.line_color.unwrap_or(self.stroke),
                config.line_width,
                0.8,
            );
        }
        if config.show_dot {
            let dot_y = if config.snap_to_point {
                points
                    .iter()
                    .find(|p| p.data_index == nearest as i32)
                    .map_or_else(|| interpolate_y_at_x(clip_x, &points), |p| p.y)
            } else {
                match kind {
                    CurveKind::Monotone => interpolate_y_at_x_smooth(clip_x, &points),
                    CurveKind::Linear => interpolate_y_at_x(clip_x, &points),
                }
            };
            scene.circle(
                Point::new(clip_x, dot_y),
                config.dot_radius,
                config.dot_color.unwrap_or(self.stroke),
                1.0,
            );
        }

        scene
    }

    /// Split the rendered points at an X between data points,
    /// synthesizing a shared boundary point on the curve.
    fn split_at_x(
        &self,
        points: &[ScreenPoint],
        clip_x: f32,
        kind: CurveKind,
    ) -> (Vec<ScreenPoint>, Vec<ScreenPoint>) {
        let boundary_y = match kind {
            CurveKind::Monotone => interpolate_y_at_x_smooth(clip_x, points),
            CurveKind::Linear => interpolate_y_at_x(clip_x, points),
        };
        let boundary = ScreenPoint::synthetic(clip_x, boundary_y);

        let mut active: Vec<ScreenPoint> =
            points.iter().copied().take_while(|p| p.x < clip_x).collect();
        active.push(boundary);
        let mut inactive = vec![boundary];
        inactive.extend(points.iter().copied().skip_while(|p| p.x <= clip_x));
        (active, inactive)
    }

    /// Nearest data-point index to a chart-local X (for scrub callbacks).
    #[must_use]
    pub fn explorer_index(&self, x: f32) -> Option<usize> {
        let screen = self.screen_points();
        if screen.is_empty() {
            return None;
        }
        let clamped = x.clamp(screen[0].x, screen[screen.len() - 1].x);
        nearest_point_index(clamped, &screen)
    }

    /// Resolve a tap X to the nearest data-point index.
    #[must_use]
    pub fn hit_test(&self, x: f32) -> Option<usize> {
        nearest_point_index(x, &self.screen_points())
    }
}
