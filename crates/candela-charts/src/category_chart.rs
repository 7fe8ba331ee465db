//! Grouped and stacked bar chart.

use crate::data::{BarDatum, Category, SelectionStyle, StackSegment};
use crate::scene::Scene;
use crate::validate::{validate_categories, DataError, ValidationWarning};
use candela_core::bar::{bar_path, border_path, stack_layout, stack_selection_offset, SegmentBox};
use candela_core::hittest::{hit_bar, hit_stack_segment};
use candela_core::reveal::{local_progress, reveal_window, Easing};
use candela_core::scale::{nice_axis_max, slot_layout, SlotLayout};
use candela_core::{ChartFrame, Color, CornerRadius, Insets, Point, Rect};
use serde::{Deserialize, Serialize};

/// Which item of a category chart is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySelection {
    /// Category index.
    pub category: usize,
    /// Bar within a grouped category.
    pub bar: Option<usize>,
    /// Segment within a stacked category. `None` selects every segment.
    pub segment: Option<usize>,
}

/// Result of resolving a press on a category chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryHit {
    /// Category index.
    pub category: usize,
    /// Bar within a grouped category, when one contained the press.
    pub bar: Option<usize>,
    /// Segment within a stacked category, when one contained the press.
    pub segment: Option<usize>,
}

/// A bar chart of grouped or stacked categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryChart {
    data: Vec<Category>,
    width: f32,
    height: f32,
    corner_radius: CornerRadius,
    group_gap: f32,
    bar_gap: f32,
    stack_gap: f32,
    max_value: Option<f64>,
    value_axis: bool,
    axis_ticks: usize,
    grid_color: Color,
    selection: SelectionStyle,
    selected: Option<CategorySelection>,
    easing: Easing,
    stagger: f32,
    #[serde(skip)]
    warnings: Vec<ValidationWarning>,
}

impl CategoryChart {
    /// Build a category chart, validating the data.
    ///
    /// # Errors
    ///
    /// Rejects non-finite values, identifying the offending category.
    pub fn new(data: Vec<Category>) -> Result<Self, DataError> {
        let warnings = validate_categories(&data)?;
        Ok(Self {
            data,
            width: 320.0,
            height: 180.0,
            corner_radius: CornerRadius::Uniform(6.0),
            group_gap: 16.0,
            bar_gap: 4.0,
            stack_gap: 0.0,
            max_value: None,
            value_axis: true,
            axis_ticks: 4,
            grid_color: Color::new(0.898, 0.906, 0.922, 1.0),
            selection: SelectionStyle::default(),
            selected: None,
            easing: Easing::STANDARD,
            stagger: 0.05,
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

    /// Corner radius applied per stack-position rule.
    #[must_use]
    pub const fn corner_radius(mut self, radius: CornerRadius) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Gap between category slots.
    #[must_use]
    pub const fn group_gap(mut self, gap: f32) -> Self {
        self.group_gap = gap;
        self
    }

    /// Gap between bars inside a grouped category.
    #[must_use]
    pub const fn bar_gap(mut self, gap: f32) -> Self {
        self.bar_gap = gap;
        self
    }

    /// Gap between segments inside a stack.
    #[must_use]
    pub const fn stack_gap(mut self, gap: f32) -> Self {
        self.stack_gap = gap;
        self
    }

    /// Pin the value-axis maximum.
    #[must_use]
    pub const fn max_value(mut self, max: f64) -> Self {
        self.max_value = Some(max);
        self
    }

    /// Show or hide the value axis.
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

    /// Select an item (or clear with `None`).
    #[must_use]
    pub const fn select(mut self, selection: Option<CategorySelection>) -> Self {
        self.selected = selection;
        self
    }

    /// Entrance easing.
    #[must_use]
    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Fraction of the timeline separating adjacent item starts.
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

    /// The categories.
    #[must_use]
    pub fn data(&self) -> &[Category] {
        &self.data
    }

    /// Canvas frame with the chart-area insets.
    #[must_use]
    pub fn frame(&self) -> ChartFrame {
        let left = if self.value_axis { 35.0 } else { 0.0 };
        ChartFrame::new(self.width, self.height, Insets::new(15.0, 0.0, 35.0, left))
    }

    /// Value-axis maximum over all categories: the tallest grouped bar or
    /// stack total, nice-snapped when the axis shows.
    #[must_use]
    pub fn axis_max(&self) -> f64 {
        let data_max = self
            .data
            .iter()
            .map(|category| match category {
                Category::Grouped { bars, .. } => {
                    bars.iter().map(|b| b.value).fold(0.0f64, f64::max)
                }
                Category::Stacked { stack, .. } => stack.iter().map(|s| s.value.max(0.0)).sum(),
            })
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

    fn category_layout(&self) -> SlotLayout {
        slot_layout(self.data.len(), self.frame().content_width(), self.group_gap)
    }

    fn value_height(&self, value: f64) -> f32 {
        ((value.max(0.0) / self.axis_max()) * f64::from(self.frame().content_height())) as f32
    }

    fn selected_in_category(&self, category: usize) -> Option<CategorySelection> {
        self.selected.filter(|s| s.category == category)
    }

    /// Produce the display list for one frame.
    #[must_use]
    pub fn render(&self, progress: f32, selection_progress: f32) -> Scene {
        let mut scene = Scene::new();
        let frame = self.frame();
        let layout = self.category_layout();
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

        for (ci, category) in self.data.iter().enumerate() {
            let category_x = frame.insets.left + layout.offset(ci);
            match category {
                Category::Grouped { bars, .. } => self.render_group(
                    &mut scene,
                    bars,
                    ci,
                    category_x,
                    layout.item_width,
                    eased,
                    selection_progress,
                ),
                Category::Stacked { stack, .. } => self.render_stack(
                    &mut scene,
                    stack,
                    ci,
                    category_x,
                    layout.item_width,
                    eased,
                    selection_progress,
                ),
            }
        }

        scene
    }

    #[allow(clippy::too_many_arguments)]
    fn render_group(
        &self,
        scene: &mut Scene,
        bars: &[BarDatum],
        ci: usize,
        category_x: f32,
        category_width: f32,
        eased: f32,
        selection_progress: f32,
    ) {
        let frame = self.frame();
        let inner = slot_layout(bars.len(), category_width, self.bar_gap);
        for (bi, bar) in bars.iter().enumerate() {
            let global_index = ci * bars.len() + bi;
            let (start, end) = reveal_window(global_index, self.stagger);
            let local = local_progress(eased, start, end);
            let height = self.value_height(bar.value) * local;
            if height <= 0.01 {
                continue;
            }

            let mut rect = Rect::new(
                category_x + inner.offset(bi),
                frame.baseline_y() - height,
                inner.item_width,
                height,
            );

            let is_selected = self
                .selected_in_category(ci)
                .is_some_and(|s| s.bar == Some(bi));
            let mut color = bar.color;
            if is_selected {
                let (w_scale, h_scale) = self.selection.scales_at(selection_progress);
                rect = rect.scaled_from_bottom(w_scale, h_scale);
                let item = bar.selection.unwrap_or_default();
                if let Some(selected_color) = item.color.or(self.selection.color) {
                    color = bar
                        .color
                        .lerp(&selected_color, selection_progress.clamp(0.0, 1.0));
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
                    let opacity = border_opacity(border.animate, selection_progress);
                    scene.stroke_with_opacity(
                        border_path(rect, corners, border.width),
                        border.color,
                        border.width,
                        opacity,
                    );
                }
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn render_stack(
        &self,
        scene: &mut Scene,
        stack: &[StackSegment],
        ci: usize,
        category_x: f32,
        category_width: f32,
        eased: f32,
        selection_progress: f32,
    ) {
        let frame = self.frame();
        let values: Vec<f64> = stack.iter().map(|s| s.value).collect();
        let boxes = stack_layout(
            &values,
            self.axis_max(),
            frame.insets.top,
            frame.content_height(),
            self.stack_gap,
        );

        let (stack_start, stack_end) = reveal_window(ci, self.stagger);
        let stack_progress = local_progress(eased, stack_start, stack_end);

        let selected_here = self.selected_in_category(ci);
        let whole_stack = self.selection.apply_to_whole_stack && selected_here.is_some();
        let whole_progress = if whole_stack {
            selection_progress.clamp(0.0, 1.0)
        } else {
            0.0
        };

        for ((si, segment), seg_box) in stack.iter().enumerate().zip(boxes.iter()) {
            let local = local_progress(stack_progress, seg_box.reveal_start, seg_box.reveal_end);
            let height = seg_box.height * local;
            if height <= 0.01 {
                continue;
            }

            let lift = stack_selection_offset(
                seg_box.below_height,
                self.selection.height_scale,
                whole_progress,
            );
            let mut rect = Rect::new(
                category_x,
                seg_box.y + (seg_box.height - height) - lift,
                category_width,
                height,
            );

            let segment_selected = selected_here
                .is_some_and(|s| s.segment.is_none() || s.segment == Some(si));
            let scaling_progress = if whole_stack {
                whole_progress
            } else if segment_selected {
                selection_progress.clamp(0.0, 1.0)
            } else {
                0.0
            };
            if scaling_progress > 0.0 {
                let (w_scale, h_scale) = self.selection.scales_at(scaling_progress);
                rect = rect.scaled_from_bottom(w_scale, h_scale);
            }

            let mut color = segment.color;
            if segment_selected && !whole_stack {
                let item = segment.selection.unwrap_or_default();
                if let Some(selected_color) = item.color.or(self.selection.color) {
                    color = segment
                        .color
                        .lerp(&selected_color, selection_progress.clamp(0.0, 1.0));
                }
            }

            let corners = match segment.corner_radius {
                Some(radius) => radius.resolve(rect.width, rect.height),
                None => self
                    .corner_radius
                    .resolve_for_stack(rect.width, rect.height, seg_box.position),
            };
            scene.fill(bar_path(rect, corners), color);

            if segment_selected && !whole_stack {
                let border = segment
                    .selection
                    .unwrap_or_default()
                    .border
                    .or(self.selection.border);
                if let Some(border) = border {
                    let opacity = border_opacity(border.animate, selection_progress);
                    scene.stroke_with_opacity(
                        border_path(rect, corners, border.width),
                        border.color,
                        border.width,
                        opacity,
                    );
                }
            }
        }

        // One border around the whole scaled stack.
        if whole_stack {
            if let Some(border) = self.selection.border {
                if let Some(rect) = self.whole_stack_rect(&boxes, category_x, category_width) {
                    let (w_scale, h_scale) = self.selection.scales_at(whole_progress);
                    let gaps = (boxes.len().saturating_sub(1)) as f32 * self.stack_gap;
                    let segments_height = rect.height - gaps;
                    let scaled_height = segments_height * h_scale + gaps;
                    let scaled_width = rect.width * w_scale;
                    let scaled = Rect::new(
                        rect.x - (scaled_width - rect.width) / 2.0,
                        rect.y - (scaled_height - rect.height),
                        scaled_width,
                        scaled_height,
                    );
                    let corners = self.corner_radius.resolve(scaled.width, scaled.height);
                    let opacity = border_opacity(border.animate, selection_progress);
                    scene.stroke_with_opacity(
                        border_path(scaled, corners, border.width),
                        border.color,
                        border.width,
                        opacity,
                    );
                }
            }
        }
    }

    fn whole_stack_rect(
        &self,
        boxes: &[SegmentBox],
        category_x: f32,
        category_width: f32,
    ) -> Option<Rect> {
        let top = boxes.last()?;
        let baseline = self.frame().baseline_y();
        Some(Rect::new(
            category_x,
            top.y,
            category_width,
            baseline - top.y,
        ))
    }

    /// Resolve a press to a category, bar, or stack segment.
    ///
    /// Candidate regions account for selection-driven scale expansion, so
    /// an expanded item's hit region expands with it.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<CategoryHit> {
        let frame = self.frame();
        if point.y < frame.insets.top || point.y > frame.baseline_y() {
            return None;
        }

        let layout = self.category_layout();
        for (ci, category) in self.data.iter().enumerate() {
            let category_x = frame.insets.left + layout.offset(ci);
            match category {
                Category::Grouped { bars, .. } => {
                    let inner = slot_layout(bars.len(), layout.item_width, self.bar_gap);
                    let rects: Vec<Rect> = bars
                        .iter()
                        .enumerate()
                        .map(|(bi, bar)| {
                            let height = self.value_height(bar.value);
                            let rect = Rect::new(
                                category_x + inner.offset(bi),
                                frame.baseline_y() - height,
                                inner.item_width,
                                height,
                            );
                            if self
                                .selected_in_category(ci)
                                .is_some_and(|s| s.bar == Some(bi))
                            {
                                rect.scaled_from_bottom(
                                    self.selection.width_scale,
                                    self.selection.height_scale,
                                )
                            } else {
                                rect
                            }
                        })
                        .collect();
                    if let Some(bi) = hit_bar(point, &rects) {
                        return Some(CategoryHit {
                            category: ci,
                            bar: Some(bi),
                            segment: None,
                        });
                    }
                }
                Category::Stacked { stack, .. } => {
                    let selected_here = self.selected_in_category(ci);
                    let width_scale = if selected_here.is_some() {
                        self.selection.width_scale
                    } else {
                        1.0
                    };
                    let scaled_width = layout.item_width * width_scale;
                    let scaled_x = category_x - (scaled_width - layout.item_width) / 2.0;
                    if point.x < scaled_x || point.x > scaled_x + scaled_width {
                        continue;
                    }

                    let values: Vec<f64> = stack.iter().map(|s| s.value).collect();
                    let boxes = stack_layout(
                        &values,
                        self.axis_max(),
                        frame.insets.top,
                        frame.content_height(),
                        self.stack_gap,
                    );
                    let segment = hit_stack_segment(
                        point.y,
                        &boxes,
                        selected_here.and_then(|s| s.segment),
                        self.selection.height_scale,
                    );
                    return Some(CategoryHit {
                        category: ci,
                        bar: None,
                        segment,
                    });
                }
            }
        }
        None
    }
}

fn border_opacity(animate: bool, selection_progress: f32) -> f32 {
    if animate {
        selection_progress.clamp(0.0, 1.0)
    } else if selection_progress > 0.5 {
        1.0
    } else {
        0.0
    }
}
