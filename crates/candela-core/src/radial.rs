//! Radial (annulus-sector) outline generation.
//!
//! Builds the rounded "donut slice" paths behind radial, donut, and
//! semicircle charts: angular layout of segments with gaps and an
//! optional background remainder, rounded end caps, reflex-arc splitting,
//! and the fully-closed-ring degenerate case.

use crate::geometry::Point;
use crate::path::Path;
use serde::{Deserialize, Serialize};

/// Sweep below which a sector renders as an empty path.
const MIN_VISIBLE_SWEEP: f32 = 0.01;

/// Corner radii start fading at this sweep...
const CORNER_FADE_START: f32 = 350.0;

/// ...and are fully gone here, so rounded caps never collide as an
/// animated sweep closes the ring.
const CORNER_FADE_END: f32 = 358.0;

/// An annulus sector: center, mean radius, thickness, and angular extent.
///
/// Angles are degrees, clockwise, with 0° along the +X axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSector {
    /// Center X.
    pub cx: f32,
    /// Center Y.
    pub cy: f32,
    /// Mean radius (middle of the ring).
    pub radius: f32,
    /// Ring thickness.
    pub stroke_width: f32,
    /// Start angle in degrees.
    pub start_angle: f32,
    /// Sweep in degrees, clockwise.
    pub sweep_angle: f32,
    /// Requested corner radius for the two end caps.
    pub corner_radius: f32,
}

impl ArcSector {
    /// Outer rim radius.
    #[must_use]
    pub fn outer_radius(&self) -> f32 {
        self.radius + self.stroke_width / 2.0
    }

    /// Inner rim radius, floored at zero for very thick rings.
    #[must_use]
    pub fn inner_radius(&self) -> f32 {
        (self.radius - self.stroke_width / 2.0).max(0.0)
    }

    /// Effective cap corner radius: clamped to the ring half-thickness
    /// (minus one pixel of breathing room), limited so the two cap
    /// arcs cannot overlap on short sweeps, and faded out as the sweep
    /// approaches a closed ring.
    #[must_use]
    pub fn effective_corner_radius(&self) -> f32 {
        let base = self
            .corner_radius
            .min(self.stroke_width / 2.0 - 1.0)
            .max(0.0);

        // Cap the angular footprint of both rounded caps to the sweep.
        let outer = self.outer_radius();
        let max_by_sweep = if outer > 0.0 {
            (self.sweep_angle / 2.0).to_radians() * outer
        } else {
            0.0
        };

        let fade = ((CORNER_FADE_END - self.sweep_angle)
            / (CORNER_FADE_END - CORNER_FADE_START))
            .clamp(0.0, 1.0);

        base.min(max_by_sweep).max(0.0) * fade
    }
}

fn polar(cx: f32, cy: f32, angle_deg: f32, r: f32) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(cx + r * rad.cos(), cy + r * rad.sin())
}

/// Append an arc of `sweep` degrees along a circle of radius `r`,
/// splitting at the midpoint when the span exceeds 180° (a single
/// endpoint-parameterized arc cannot express a reflex angle
/// unambiguously). `clockwise` selects the winding.
fn append_rim_arc(
    path: &mut Path,
    cx: f32,
    cy: f32,
    r: f32,
    from_deg: f32,
    to_deg: f32,
    clockwise: bool,
) {
    let span = (to_deg - from_deg).abs();
    if span > 180.0 {
        let mid = (from_deg + to_deg) / 2.0;
        let mid_point = polar(cx, cy, mid, r);
        path.arc_to(r, false, clockwise, mid_point.x, mid_point.y);
    }
    let end = polar(cx, cy, to_deg, r);
    path.arc_to(r, false, clockwise, end.x, end.y);
}

/// Full annulus for sweeps of 360° or more: each rim is drawn as two
/// half-circle arcs (a closed ring has no distinct start/end point for a
/// single directed arc), with the inner rim wound opposite so either
/// fill rule leaves the hole open. Corner rounding is suppressed.
fn full_ring_path(sector: &ArcSector) -> Path {
    let ArcSector { cx, cy, .. } = *sector;
    let outer = sector.outer_radius();
    let inner = sector.inner_radius();
    let start = sector.start_angle;

    let mut path = Path::new();

    let outer_start = polar(cx, cy, start, outer);
    path.move_to(outer_start.x, outer_start.y);
    append_rim_arc(&mut path, cx, cy, outer, start, start + 180.0, true);
    append_rim_arc(&mut path, cx, cy, outer, start + 180.0, start + 360.0, true);
    path.close();

    if inner > 0.0 {
        let inner_start = polar(cx, cy, start, inner);
        path.move_to(inner_start.x, inner_start.y);
        append_rim_arc(&mut path, cx, cy, inner, start, start - 180.0, false);
        append_rim_arc(&mut path, cx, cy, inner, start - 180.0, start - 360.0, false);
        path.close();
    }
    path
}

/// Build the filled outline of an annulus sector.
///
/// Sweeps below a hundredth of a degree yield an empty path; sweeps of
/// 360° or more collapse to the closed-ring form. Otherwise the outline
/// runs: rounded cap out to the outer rim at the start angle, outer arc,
/// rounded cap in at the end, across the ring, rounded cap onto the
/// inner rim, inner arc back, rounded cap out, close.
#[must_use]
pub fn sector_path(sector: &ArcSector) -> Path {
    if sector.sweep_angle <= MIN_VISIBLE_SWEEP {
        return Path::new();
    }
    if sector.sweep_angle >= 360.0 {
        return full_ring_path(sector);
    }

    let ArcSector { cx, cy, .. } = *sector;
    let outer = sector.outer_radius();
    let inner = sector.inner_radius();
    let corner = sector.effective_corner_radius();
    let start = sector.start_angle;
    let end = start + sector.sweep_angle;

    let mut path = Path::new();

    if corner <= 0.0 {
        let outer_start = polar(cx, cy, start, outer);
        path.move_to(outer_start.x, outer_start.y);
        append_rim_arc(&mut path, cx, cy, outer, start, end, true);

        let inner_end = polar(cx, cy, end, inner);
        path.line_to(inner_end.x, inner_end.y);
        append_rim_arc(&mut path, cx, cy, inner, end, start, false);
        path.close();
        return path;
    }

    // Angular footprint of a cap's rounded run, measured at the outer rim
    // and reused on the inner rim.
    let angle_offset = (corner / outer).to_degrees();

    let outer_start_radial = polar(cx, cy, start, outer - corner);
    let outer_start_offset = polar(cx, cy, start + angle_offset, outer);
    let outer_end_offset = polar(cx, cy, end - angle_offset, outer);
    let outer_end_radial = polar(cx, cy, end, outer - corner);

    let inner_start_radial = polar(cx, cy, end, inner + corner);
    let inner_start_offset = polar(cx, cy, end - angle_offset, inner);
    let inner_end_offset = polar(cx, cy, start + angle_offset, inner);
    let inner_end_radial = polar(cx, cy, start, inner + corner);

    path.move_to(outer_start_radial.x, outer_start_radial.y);
    path.arc_to(corner, false, true, outer_start_offset.x, outer_start_offset.y);
    append_rim_arc(
        &mut path,
        cx,
        cy,
        outer,
        start + angle_offset,
        end - angle_offset,
        true,
    );
    path.arc_to(corner, false, true, outer_end_radial.x, outer_end_radial.y);

    path.line_to(inner_start_radial.x, inner_start_radial.y);
    path.arc_to(corner, false, true, inner_start_offset.x, inner_start_offset.y);
    append_rim_arc(
        &mut path,
        cx,
        cy,
        inner,
        end - angle_offset,
        start + angle_offset,
        false,
    );
    path.arc_to(corner, false, true, inner_end_radial.x, inner_end_radial.y);
    path.close();

    path
}

/// How a selected segment grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionExpand {
    /// Only the stroke width grows; the ring's mean radius stays fixed.
    #[default]
    Scale,
    /// The stroke grows and the mean radius shifts outward by half the
    /// growth, so the inner rim holds still.
    Expand,
}

/// Grow a sector's ring thickness by `increase · progress` according to
/// the expansion mode.
#[must_use]
pub fn expand_sector(
    sector: &ArcSector,
    increase: f32,
    mode: SelectionExpand,
    progress: f32,
) -> ArcSector {
    let growth = increase * progress.clamp(0.0, 1.0);
    ArcSector {
        stroke_width: sector.stroke_width + growth,
        radius: match mode {
            SelectionExpand::Scale => sector.radius,
            SelectionExpand::Expand => sector.radius + growth / 2.0,
        },
        ..*sector
    }
}

/// Angular placement of one value within a radial layout, plus its share
/// of the overall reveal progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialSlice {
    /// Start angle in degrees.
    pub start_angle: f32,
    /// Sweep in degrees.
    pub sweep_angle: f32,
    /// Start of this slice's reveal window within global progress [0,1].
    pub reveal_start: f32,
    /// End of this slice's reveal window.
    pub reveal_end: f32,
}

/// Configuration for [`radial_layout`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialLayoutConfig {
    /// Start angle of the first segment, degrees.
    pub start_angle: f32,
    /// Total sweep available to all segments, degrees.
    pub sweep_angle: f32,
    /// Gap between adjacent segments, degrees.
    pub gap_degrees: f32,
    /// Count a trailing gap back to the first segment (full rings).
    pub closed_loop: bool,
    /// Value at which the segments fill the whole sweep; defaults to the
    /// sum of all values.
    pub max_value: Option<f64>,
    /// Lay out an implicit background slice over the uncovered sweep.
    pub background: bool,
}

impl Default for RadialLayoutConfig {
    fn default() -> Self {
        Self {
            start_angle: -90.0,
            sweep_angle: 360.0,
            gap_degrees: 0.0,
            closed_loop: false,
            max_value: None,
            background: false,
        }
    }
}

/// Result of [`radial_layout`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RadialLayout {
    /// One slice per input value, in order.
    pub slices: Vec<RadialSlice>,
    /// The background remainder, when requested and the values leave
    /// uncovered sweep.
    pub background: Option<RadialSlice>,
}

/// Lay segments out clockwise from the start angle.
///
/// Each value consumes sweep proportional to its share of the maximum;
/// gaps are subtracted from the available sweep up front. Reveal windows
/// tile `[0, 1]` in segment order so the ring fills sequentially.
#[must_use]
pub fn radial_layout(values: &[f64], config: &RadialLayoutConfig) -> RadialLayout {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    let max_value = match config.max_value {
        Some(m) if m > 0.0 => m,
        _ => total,
    };

    let coverage = if max_value > 0.0 {
        (total / max_value).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let needs_background = config.background && coverage < 1.0;

    let has_gap = config.gap_degrees > 0.0;
    let total_slots = values.len() + usize::from(needs_background);
    let gap_count = if total_slots == 0 {
        0
    } else if config.closed_loop && has_gap {
        total_slots
    } else {
        total_slots - 1
    };
    let total_gap_degrees = if has_gap {
        config.gap_degrees * gap_count as f32
    } else {
        0.0
    };
    let available = (config.sweep_angle - total_gap_degrees).max(0.0);

    let mut current_angle = config.start_angle;
    let mut cumulative = 0.0f32;
    let mut slices = Vec::with_capacity(values.len());
    for &value in values {
        let share = if max_value > 0.0 {
            (value.max(0.0) / max_value) as f32
        } else {
            0.0
        };
        let sweep = available * share;
        slices.push(RadialSlice {
            start_angle: current_angle,
            sweep_angle: sweep,
            reveal_start: cumulative,
            reveal_end: cumulative + share,
        });
        current_angle += sweep + if has_gap { config.gap_degrees } else { 0.0 };
        cumulative += share;
    }

    let background = needs_background.then(|| {
        let sweep = (config.start_angle + config.sweep_angle - current_angle).max(0.0);
        RadialSlice {
            start_angle: current_angle,
            sweep_angle: sweep,
            reveal_start: cumulative,
            reveal_end: cumulative + (1.0 - coverage as f32),
        }
    });

    RadialLayout { slices, background }
}
