//! Flat bar chart.

use crate::data::{BarDatum, SelectionStyle};
use crate::scene::Scene;
use crate::validate::{validate_bars, DataError, ValidationWarning};
use candela_core::bar::{bar_path, border_path};
use candela_core::reveal::{local_progress, reveal_window, Easing};
use candela_core::scale::{nice_axis_max, slot_layout, SlotLayout};
use candela_core::{ChartFrame, Color, CornerRadius, Insets, Point, Rect};
use serde::{Deserialize, Serialize};

/// Default fraction of the timeline separating adjacent bar starts.
const DEFAULT_STAGGER: f32 = 0.05;

/// A flat bar chart: one value per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    data: Vec<BarDatum>,
    width: f32,
    height: f32,
    corner_radius: CornerRadius,
    bar_gap: f32,
    max_value: Option<f64>,
    value_axis: bool,
    axis_ticks: usize,
    grid_color: Color,
    selection: SelectionStyle,
    selected: Option<usize>,
    easing: Easing,
    stagger: f32,
    #[serde(skip)]
    warnings: Vec<ValidationWarning>,
}

impl BarChart {
    /// Build a bar chart, validating the data.
    ///
    /// # Errors
    ///
    /// Rejects non-finite values, identifying the offending index.
    pub fn new(data: Vec<BarDatum>) -> Result<Self, DataError> {
        let warnings = validate_bars(&data)?;
        Ok(Self {
            data,
            width: 320.0,
            height: 180.0,
            corner_radius: CornerRadius::Uniform(6.0),
            bar_gap: 8.0,
            max_value: None,
            value_axis: true,
            axis_ticks: 4,
            grid_color: Color::new(0.898, 0.906, 0.922, 1.0),
            selection: SelectionStyle::default(),
            selected: None,
            easing: Easing::STANDARD,
            stagger: DEFAULT_STAGGER,
            warnings,
        })
    }

    /// Canvas size.
    #[must_use]
    pub const fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Corner radius for every bar.
    #[must_use]
    pub const fn corner_radius(mut self, radius: CornerRadius) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Gap between adjacent bars.
    #[must_use]
    pub const fn bar_gap(mut self, gap: f32) -> Self {
        self.bar_gap = gap;
        self
    }

    /// Pin the value axis maximum instead of deriving it from the data.
    #[must_use]
    pub const fn max_value(mut self, max: f64) -> Self {
        self.max_value = Some(max);
        self
    }

    /// Show or hide the value axis (grid and nice-maximum snapping).
    #[must_use]
    pub const fn value_axis(mut self, show: bool) -> Self {
        self.value_axis = show;
        self
    }

    /// Number of value-axis intervals.
    #[must_use]
    pub const fn axis_ticks(mut self, ticks: usize) -> Self {
        self.axis_ticks = ticks;
        self
    }

    /// Selection styling.
    #[must_use]
    pub const fn selection(mut self, style: SelectionStyle) -> Self {
        self.selection = style;
        self
    }

    /// Select a bar (or clear with `None`).
    #[must_use]
    pub const fn select(mut self, index: Option<usize>) -> Self {
        self.selected = index;
        self
    }

    /// Entrance easing.
    #[must_use]
    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Fraction of the timeline separating adjacent bar starts.
    #[must_use]
    pub const fn stagger(mut self, stagger: f32) -> Self {
        self.stagger = stagger;
        self
    }

    /// Warnings collected at construction.
    #[must_use]
    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    /// The bar data.
    #[must_use]
    pub fn data(&self) -> &[BarDatum] {
        &self.data
    }

    /// Canvas frame with the chart-area insets.
    #[must_use]
    pub fn frame(&self) -> ChartFrame {
        let left = if self.value_axis { 35.0 } else { 0.0 };
        ChartFrame::new(self.width, self.height, Insets::new(15.0, 0.0, 35.0, left))
    }

    /// Value-axis maximum: a configured override, else the nice-snapped
    /// (or raw, when the axis is hidden) data maximum.
    #[must_use]
    pub fn axis_max(&self) -> f64 {
        let data_max = self
            .data
            .iter()
            .map(|b| b.value)
            .fold(0.0f64, f64::max);
        let max = self.max_value.unwrap_or(data_max);
        if self.value_axis {
            nice_axis_max(max)
        } else if max > 0.0 {
            max
        } else {
            10.0
        }
    }

    fn layout(&self) -> SlotLayout {
        slot_layout(self.data.len(), self.frame().content_width(), self.bar_gap)
    }

    /// Full-height rect of bar `index` at entrance progress 1, without
    /// selection scaling.
    fn base_rect(&self, index: usize, layout: &SlotLayout) -> Rect {
        let frame = self.frame();
        let height =
            ((self.data[index].value.max(0.0) / self.axis_max()) * f64::from(frame.content_height())) as f32;
        Rect::new(
            frame.insets.left + layout.offset(index),
            frame.baseline_y() - height,
            layout.item_width,
            height,
        )
    }

    /// Produce the display list for one frame.
    ///
    /// `progress` is the entrance timeline in [0, 1]; `selection_progress`
    /// animates the currently selected bar's styling in and out.
    #[must_use]
    pub fn render(&self, progress: f32, selection_progress: f32) -> Scene {
        let mut scene = Scene::new();
        let frame = self.frame();
        let layout = self.layout();
        let eased = self.easing.apply(progress);

        if self.value_axis {
            for i in 0..=self.axis_ticks.max(1) {
                let y = frame.insets.top
                    + (i as f32 / self.axis_ticks.max(1) as f32) * frame.content_height();
                scene.line(
                    Point::new(frame.insets.left, y),
                    Point::new(self.width, y),
                    self.grid_color,
                    1.0,
                    0.3,
                );
            }
        }

        for (index, bar) in self.data.iter().enumerate() {
            let (start, end) = reveal_window(index, self.stagger);
            let local = local_progress(eased, start, end);
            let full = self.base_rect(index, &layout);
            let height = full.height * local;
            if height <= 0.01 {
                continue;
            }
            let mut rect = Rect::new(full.x, frame.baseline_y() - height, full.width, height);

            let is_selected = self.selected == Some(index);
            let mut color = bar.color;
            if is_selected {
                let (w_scale, h_scale) = self.selection.scales_at(selection_progress);
                rect = rect.scaled_from_bottom(w_scale, h_scale);

                let item = bar.selection.unwrap_or_default();
                if let Some(selected_color) = item.color.or(self.selection.color) {
                    color = bar.color.lerp(&selected_color, selection_progress.clamp(0.0, 1.0));
                }
            }

            let corners = self.corner_radius.resolve(rect.width, rect.height);
            scene.fill(bar_path(rect, corners), color);

            if is_selected {
                let border = bar
                    .selection
                    .unwrap_or_default()
                    .border
                    .or(self.selection.border);
                if let Some(border) = border {
                    let opacity = if border.animate {
                        selection_progress.clamp(0.0, 1.0)
                    } else if selection_progress > 0.5 {
                        1.0
                    } else {
                        0.0
                    };
                    scene.stroke_with_opacity(
                        border_path(rect, corners, border.width),
                        border.color,
                        border.width,
                        opacity,
                    );
                }
            }
        }

        scene
    }

    /// Resolve a press to a bar index.
    ///
    /// Flat bars accept a press anywhere within the bar's full-height
    /// column, so short bars stay tappable.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        let frame = self.frame();
        if point.y < frame.insets.top || point.y > frame.baseline_y() {
            return None;
        }
        let layout = self.layout();
        (0..self.data.len()).find(|&index| {
            let left = frame.insets.left + layout.offset(index);
            point.x >= left && point.x <= left + layout.item_width
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BorderStyle;
    use crate::scene::{Paint, ShapeGeometry};

    fn chart() -> BarChart {
        BarChart::new(vec![
            BarDatum::new(30.0, Color::rgb(0.5, 0.8, 0.3)),
            BarDatum::new(80.0, Color::rgb(0.5, 0.8, 0.3)),
            BarDatum::new(55.0, Color::rgb(0.5, 0.8, 0.3)),
        ])
        .unwrap()
        .size(320.0, 180.0)
    }

    fn bar_fills(scene: &Scene) -> Vec<&ShapeGeometry> {
        scene
            .shapes()
            .iter()
            .filter(|s| matches!(s.paint, Paint::Fill { .. }))
            .map(|s| &s.geometry)
            .collect()
    }

    #[test]
    fn test_axis_max_snaps_nicely() {
        assert_eq!(chart().axis_max(), 100.0);
        assert_eq!(chart().max_value(90.0).axis_max(), 100.0);
        assert_eq!(chart().value_axis(false).axis_max(), 80.0);
    }

    #[test]
    fn test_render_at_full_progress_draws_all_bars() {
        let scene = chart().render(1.0, 0.0);
        assert_eq!(bar_fills(&scene).len(), 3);
    }

    #[test]
    fn test_render_at_zero_progress_draws_no_bars() {
        let scene = chart().render(0.0, 0.0);
        assert!(bar_fills(&scene).is_empty());
    }

    #[test]
    fn test_stagger_delays_later_bars() {
        // Just after the start, the first bar has begun but the last
        // (staggered) has not.
        let scene = chart().stagger(0.3).easing(Easing::Linear).render(0.05, 0.0);
        assert_eq!(bar_fills(&scene).len(), 1);
    }

    #[test]
    fn test_selection_border_emitted() {
        let scene = chart()
            .selection(SelectionStyle {
                border: Some(BorderStyle::default()),
                ..SelectionStyle::default()
            })
            .select(Some(1))
            .render(1.0, 1.0);
        let strokes = scene
            .shapes()
            .iter()
            .filter(|s| {
                matches!(s.paint, Paint::Stroke { .. })
                    && matches!(s.geometry, ShapeGeometry::Path(_))
            })
            .count();
        assert_eq!(strokes, 1);
    }

    #[test]
    fn test_hit_test_resolves_columns() {
        let c = chart();
        let frame = c.frame();
        // Middle of the second column.
        let layout_width = frame.content_width();
        let x = frame.insets.left + layout_width / 2.0;
        let y = frame.insets.top + 10.0;
        assert_eq!(c.hit_test(Point::new(x, y)), Some(1));
        // Above the chart area: no hit.
        assert_eq!(c.hit_test(Point::new(x, 0.0)), None);
    }

    #[test]
    fn test_empty_chart_renders_empty() {
        let c = BarChart::new(vec![]).unwrap();
        assert_eq!(c.warnings().len(), 1);
        let scene = c.value_axis(false).render(1.0, 0.0);
        assert!(scene.is_empty());
    }

    proptest::proptest! {
        #[test]
        fn prop_hit_test_agrees_with_column_layout(
            values in proptest::collection::vec(0.0f64..100.0, 1..8),
            frac in 0.001f32..0.999,
        ) {
            let data: Vec<BarDatum> = values
                .iter()
                .map(|&v| BarDatum::new(v, Color::BLACK))
                .collect();
            let chart = BarChart::new(data).unwrap();
            let frame = chart.frame();
            let x = frame.insets.left + frame.content_width() * frac;
            let probe = Point::new(x, frame.baseline_y() - 1.0);

            let layout = slot_layout(values.len(), frame.content_width(), 8.0);
            match chart.hit_test(probe) {
                Some(index) => {
                    let left = frame.insets.left + layout.offset(index);
                    proptest::prop_assert!(x >= left && x <= left + layout.item_width);
                }
                None => {
                    // The probe fell in a gap between columns.
                    for i in 0..values.len() {
                        let left = frame.insets.left + layout.offset(i);
                        proptest::prop_assert!(x < left || x > left + layout.item_width);
                    }
                }
            }
        }
    }
}
