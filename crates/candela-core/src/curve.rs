//! Line and area curve generation.
//!
//! Builds stroke and fill outlines through an ordered sequence of
//! [`ScreenPoint`]s, either as straight segments or as a monotone cubic
//! interpolant (Fritsch–Carlson tangents) that never overshoots the data.

use crate::path::Path;
use crate::scale::ScreenPoint;
use serde::{Deserialize, Serialize};

/// Interpolation mode for line/area outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurveKind {
    /// Straight segments between points.
    Linear,
    /// Monotone cubic Hermite interpolation.
    #[default]
    Monotone,
}

/// Above this many points, rendering downsamples to a stride subset.
pub const MAX_RENDER_POINTS: usize = 150;

/// Above this many rendered points, smooth curves fall back to linear.
pub const SMOOTH_POINT_LIMIT: usize = 100;

/// Control points for the cubic between each adjacent pair of inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CubicControls {
    c1x: f32,
    c1y: f32,
    c2x: f32,
    c2y: f32,
}

/// Monotone-cubic control points per segment (Fritsch–Carlson weighting).
///
/// Interior tangents are the weighted harmonic mean of adjacent secant
/// slopes, forced to zero at local extrema so the interpolant never
/// overshoots; boundary tangents equal the nearest secant.
fn monotone_controls(points: &[ScreenPoint]) -> Vec<CubicControls> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let mut slopes = Vec::with_capacity(n - 1);
    for i in 0..n - 1 {
        let dx = points[i + 1].x - points[i].x;
        let dy = points[i + 1].y - points[i].y;
        slopes.push(if dx == 0.0 { 0.0 } else { dy / dx });
    }

    let mut tangents = vec![0.0f32; n];
    tangents[0] = slopes[0];
    for i in 1..n - 1 {
        let s1 = slopes[i - 1];
        let s2 = slopes[i];
        if s1 * s2 <= 0.0 {
            tangents[i] = 0.0;
        } else {
            let dx1 = points[i].x - points[i - 1].x;
            let dx2 = points[i + 1].x - points[i].x;
            let w1 = 2.0 * dx2 + dx1;
            let w2 = dx2 + 2.0 * dx1;
            tangents[i] = (3.0 * (w1 + w2)) / (w1 / s1 + w2 / s2);
        }
    }
    tangents[n - 1] = slopes[n - 2];

    (0..n - 1)
        .map(|i| {
            let dx = (points[i + 1].x - points[i].x) / 3.0;
            CubicControls {
                c1x: points[i].x + dx,
                c1y: points[i].y + dx * tangents[i],
                c2x: points[i + 1].x - dx,
                c2y: points[i + 1].y - dx * tangents[i + 1],
            }
        })
        .collect()
}

/// Build a stroke-only path through the points.
///
/// Zero points yield an empty path; a single point yields a zero-length
/// path positioned at that point.
#[must_use]
pub fn line_path(points: &[ScreenPoint], kind: CurveKind) -> Path {
    let mut path = Path::new();
    let Some(first) = points.first() else {
        return path;
    };
    path.move_to(first.x, first.y);
    if points.len() == 1 {
        return path;
    }

    append_curve(&mut path, points, kind);
    path
}

/// Build a closed fill region under the curve down to `baseline_y`.
///
/// A single point yields a degenerate triangle collapsing to a vertical
/// line at that X.
#[must_use]
pub fn area_path(points: &[ScreenPoint], kind: CurveKind, baseline_y: f32) -> Path {
    let mut path = Path::new();
    let Some(first) = points.first() else {
        return path;
    };

    if points.len() == 1 {
        path.move_to(first.x, baseline_y)
            .line_to(first.x, first.y)
            .line_to(first.x, baseline_y)
            .close();
        return path;
    }

    path.move_to(first.x, baseline_y).line_to(first.x, first.y);
    append_curve(&mut path, points, kind);

    let last = points[points.len() - 1];
    path.line_to(last.x, baseline_y).close();
    path
}

fn append_curve(path: &mut Path, points: &[ScreenPoint], kind: CurveKind) {
    match kind {
        CurveKind::Linear => {
            for p in &points[1..] {
                path.line_to(p.x, p.y);
            }
        }
        CurveKind::Monotone => {
            let controls = monotone_controls(points);
            for (i, c) in controls.iter().enumerate() {
                let to = points[i + 1];
                path.cubic_to(c.c1x, c.c1y, c.c2x, c.c2y, to.x, to.y);
            }
        }
    }
}

/// Split the curve at a point index into active and inactive halves for
/// explorer rendering. The split point belongs to both halves.
#[must_use]
pub fn split_at_index(
    points: &[ScreenPoint],
    split_index: usize,
    kind: CurveKind,
    baseline_y: Option<f32>,
) -> (Path, Path) {
    if points.is_empty() {
        return (Path::new(), Path::new());
    }
    let split = split_index.min(points.len() - 1);
    let active_points = &points[..=split];
    let inactive_points = &points[split..];

    let build = |pts: &[ScreenPoint]| match baseline_y {
        Some(baseline) => area_path(pts, kind, baseline),
        None => line_path(pts, kind),
    };
    (build(active_points), build(inactive_points))
}

/// Curve Y at an arbitrary X, linear interpolation between neighbors.
///
/// Clamps to the endpoint Y outside the point span.
#[must_use]
pub fn interpolate_y_at_x(screen_x: f32, points: &[ScreenPoint]) -> f32 {
    let Some(first) = points.first() else {
        return 0.0;
    };
    let last = points[points.len() - 1];
    if points.len() == 1 || screen_x <= first.x {
        return first.y;
    }
    if screen_x >= last.x {
        return last.y;
    }

    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        if screen_x >= p1.x && screen_x <= p2.x {
            let t = if p2.x == p1.x {
                0.0
            } else {
                (screen_x - p1.x) / (p2.x - p1.x)
            };
            return p1.y + (p2.y - p1.y) * t;
        }
    }
    last.y
}

/// Scalar cubic Bézier evaluation.
pub(crate) fn cubic_at(t: f32, p0: f32, p1: f32, p2: f32, p3: f32) -> f32 {
    let mt = 1.0 - t;
    mt * mt * mt * p0 + 3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t * p3
}

/// Derivative of a scalar cubic Bézier.
pub(crate) fn cubic_derivative_at(t: f32, p0: f32, p1: f32, p2: f32, p3: f32) -> f32 {
    let mt = 1.0 - t;
    -3.0 * mt * mt * p0 + 3.0 * mt * mt * p1 - 6.0 * mt * t * p1 + 6.0 * mt * t * p2
        - 3.0 * t * t * p2
        + 3.0 * t * t * p3
}

/// Solve a cubic Bézier X polynomial for the parameter hitting `target`,
/// by Newton iteration from an initial guess. Used for curve Y-at-X
/// queries and cubic-bézier easing alike.
pub(crate) fn solve_cubic_for_t(target: f32, guess: f32, p0: f32, p1: f32, p2: f32, p3: f32) -> f32 {
    let mut t = guess.clamp(0.0, 1.0);
    for _ in 0..8 {
        let error = cubic_at(t, p0, p1, p2, p3) - target;
        if error.abs() < 1e-3 {
            break;
        }
        let derivative = cubic_derivative_at(t, p0, p1, p2, p3);
        if derivative.abs() < 1e-4 {
            break;
        }
        t = (t - error / derivative).clamp(0.0, 1.0);
    }
    t
}

/// Curve Y at an arbitrary X on the monotone cubic interpolant.
///
/// Newton-iterates the segment's X polynomial (8 iterations, tolerance
/// 1e-3) to recover the curve parameter, then evaluates Y. Clamps to the
/// endpoint Y outside the span.
#[must_use]
pub fn interpolate_y_at_x_smooth(screen_x: f32, points: &[ScreenPoint]) -> f32 {
    let Some(first) = points.first() else {
        return 0.0;
    };
    let last = points[points.len() - 1];
    if points.len() == 1 || screen_x <= first.x {
        return first.y;
    }
    if screen_x >= last.x {
        return last.y;
    }

    let controls = monotone_controls(points);
    for (i, c) in controls.iter().enumerate() {
        let p0 = points[i];
        let p3 = points[i + 1];
        if screen_x >= p0.x && screen_x <= p3.x {
            let guess = if p3.x == p0.x {
                0.0
            } else {
                (screen_x - p0.x) / (p3.x - p0.x)
            };
            let t = solve_cubic_for_t(screen_x, guess, p0.x, c.c1x, c.c2x, p3.x);
            return cubic_at(t, p0.y, c.c1y, c.c2y, p3.y);
        }
    }
    last.y
}

/// Stride-subsample down to roughly `max_points`, always retaining the
/// final point. Deterministic for a given input length.
#[must_use]
pub fn downsample(points: &[ScreenPoint], max_points: usize) -> Vec<ScreenPoint> {
    if points.len() <= max_points || max_points == 0 {
        return points.to_vec();
    }
    let step = points.len().div_ceil(max_points);
    let mut sampled: Vec<ScreenPoint> = points.iter().copied().step_by(step).collect();
    let last = points[points.len() - 1];
    if sampled.last().map(|p| p.data_index) != Some(last.data_index) {
        sampled.push(last);
    }
    sampled
}

/// Resolve the curve kind actually rendered for a point count: smooth
/// curves above [`SMOOTH_POINT_LIMIT`] rendered points degrade to linear.
#[must_use]
pub fn effective_kind(kind: CurveKind, rendered_points: usize) -> CurveKind {
    if rendered_points > SMOOTH_POINT_LIMIT {
        CurveKind::Linear
    } else {
        kind
    }
}

/// Scale each point's Y toward the baseline by entrance progress `p`,
/// producing the "grow from baseline" reveal.
#[must_use]
pub fn apply_progress(points: &[ScreenPoint], baseline_y: f32, progress: f32) -> Vec<ScreenPoint> {
    points
        .iter()
        .map(|p| ScreenPoint::new(p.x, baseline_y + (p.y - baseline_y) * progress, p.data_index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathCommand;
    use proptest::prelude::*;

    fn pts(raw: &[(f32, f32)]) -> Vec<ScreenPoint> {
        raw.iter()
            .enumerate()
            .map(|(i, &(x, y))| ScreenPoint::new(x, y, i as i32))
            .collect()
    }

    // =========================================================================
    // Path construction
    // =========================================================================

    #[test]
    fn test_line_path_empty() {
        assert!(line_path(&[], CurveKind::Linear).is_empty());
    }

    #[test]
    fn test_line_path_single_point() {
        let path = line_path(&pts(&[(5.0, 7.0)]), CurveKind::Monotone);
        assert_eq!(path.len(), 1);
        assert!(matches!(path.commands()[0], PathCommand::MoveTo(p) if p.x == 5.0 && p.y == 7.0));
    }

    #[test]
    fn test_linear_path_hits_every_point() {
        let points = pts(&[(0.0, 10.0), (10.0, 4.0), (20.0, 8.0)]);
        let path = line_path(&points, CurveKind::Linear);
        assert_eq!(path.len(), 3);
        assert!(matches!(path.commands()[2], PathCommand::LineTo(p) if p.x == 20.0 && p.y == 8.0));
    }

    #[test]
    fn test_monotone_path_endpoints_match_points() {
        let points = pts(&[(0.0, 10.0), (10.0, 4.0), (20.0, 8.0), (30.0, 2.0)]);
        let path = line_path(&points, CurveKind::Monotone);
        let mut on_curve = vec![];
        for cmd in path.commands() {
            match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => on_curve.push(p),
                PathCommand::CubicTo { to, .. } => on_curve.push(to),
                _ => {}
            }
        }
        assert_eq!(on_curve.len(), points.len());
        for (p, sp) in on_curve.iter().zip(points.iter()) {
            assert_eq!(p.x, sp.x);
            assert_eq!(p.y, sp.y);
        }
    }

    #[test]
    fn test_area_path_closes_to_baseline() {
        let points = pts(&[(0.0, 10.0), (10.0, 4.0)]);
        let path = area_path(&points, CurveKind::Linear, 100.0);
        let cmds = path.commands();
        assert!(matches!(cmds[0], PathCommand::MoveTo(p) if p.y == 100.0));
        assert!(matches!(cmds[cmds.len() - 2], PathCommand::LineTo(p) if p.y == 100.0));
        assert!(matches!(cmds[cmds.len() - 1], PathCommand::Close));
    }

    #[test]
    fn test_area_path_single_point_degenerate_triangle() {
        let path = area_path(&pts(&[(5.0, 7.0)]), CurveKind::Monotone, 50.0);
        assert_eq!(path.len(), 4);
        assert!(matches!(path.commands()[3], PathCommand::Close));
    }

    #[test]
    fn test_split_shares_the_split_point() {
        let points = pts(&[(0.0, 0.0), (10.0, 5.0), (20.0, 2.0), (30.0, 9.0)]);
        let (active, inactive) = split_at_index(&points, 1, CurveKind::Linear, None);
        assert!(matches!(
            active.commands().last(),
            Some(PathCommand::LineTo(p)) if p.x == 10.0
        ));
        assert!(matches!(
            inactive.commands().first(),
            Some(PathCommand::MoveTo(p)) if p.x == 10.0
        ));
    }

    #[test]
    fn test_split_index_clamps() {
        let points = pts(&[(0.0, 0.0), (10.0, 5.0)]);
        let (active, inactive) = split_at_index(&points, 99, CurveKind::Linear, None);
        assert_eq!(active.len(), 2);
        // Inactive half degenerates to the final point.
        assert_eq!(inactive.len(), 1);
    }

    // =========================================================================
    // Interpolation
    // =========================================================================

    #[test]
    fn test_interpolate_linear_midpoint() {
        let points = pts(&[(0.0, 0.0), (10.0, 20.0)]);
        assert_eq!(interpolate_y_at_x(5.0, &points), 10.0);
    }

    #[test]
    fn test_interpolate_clamps_outside_span() {
        let points = pts(&[(10.0, 3.0), (20.0, 9.0)]);
        assert_eq!(interpolate_y_at_x(0.0, &points), 3.0);
        assert_eq!(interpolate_y_at_x(30.0, &points), 9.0);
        assert_eq!(interpolate_y_at_x_smooth(0.0, &points), 3.0);
        assert_eq!(interpolate_y_at_x_smooth(30.0, &points), 9.0);
    }

    #[test]
    fn test_smooth_interpolation_passes_through_data() {
        let points = pts(&[(0.0, 10.0), (10.0, 4.0), (20.0, 8.0), (30.0, 2.0)]);
        for p in &points {
            let y = interpolate_y_at_x_smooth(p.x, &points);
            assert!(
                (y - p.y).abs() < 1e-2,
                "expected y={} at x={}, got {y}",
                p.y,
                p.x
            );
        }
    }

    proptest! {
        #[test]
        fn prop_monotone_input_gives_monotone_curve(
            ys in proptest::collection::vec(0.0f32..100.0, 4..10)
        ) {
            // Sort Y values so the input is non-decreasing in X.
            let mut ys = ys;
            ys.sort_by(|a, b| a.partial_cmp(b).expect("finite"));
            let points: Vec<ScreenPoint> = ys
                .iter()
                .enumerate()
                .map(|(i, &y)| ScreenPoint::new(i as f32 * 10.0, y, i as i32))
                .collect();

            let last_x = points[points.len() - 1].x;
            let mut prev = interpolate_y_at_x_smooth(0.0, &points);
            let mut x = 0.5;
            while x < last_x {
                let y = interpolate_y_at_x_smooth(x, &points);
                // Small epsilon absorbs Newton tolerance.
                prop_assert!(y >= prev - 0.05, "curve decreased at x={x}: {prev} -> {y}");
                prev = y;
                x += 0.5;
            }
        }
    }

    // =========================================================================
    // Downsampling & progress
    // =========================================================================

    #[test]
    fn test_downsample_passthrough_below_limit() {
        let points = pts(&[(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(downsample(&points, MAX_RENDER_POINTS).len(), 2);
    }

    #[test]
    fn test_downsample_retains_first_and_last() {
        let points: Vec<ScreenPoint> = (0..1000)
            .map(|i| ScreenPoint::new(i as f32, 0.0, i))
            .collect();
        let sampled = downsample(&points, MAX_RENDER_POINTS);
        assert!(sampled.len() <= MAX_RENDER_POINTS + 1);
        assert_eq!(sampled[0].data_index, 0);
        assert_eq!(sampled[sampled.len() - 1].data_index, 999);
    }

    #[test]
    fn test_effective_kind_falls_back_to_linear() {
        assert_eq!(
            effective_kind(CurveKind::Monotone, 101),
            CurveKind::Linear
        );
        assert_eq!(
            effective_kind(CurveKind::Monotone, 100),
            CurveKind::Monotone
        );
    }

    #[test]
    fn test_apply_progress_scales_toward_baseline() {
        let points = pts(&[(0.0, 20.0)]);
        let collapsed = apply_progress(&points, 100.0, 0.0);
        assert_eq!(collapsed[0].y, 100.0);
        let half = apply_progress(&points, 100.0, 0.5);
        assert_eq!(half[0].y, 60.0);
        let full = apply_progress(&points, 100.0, 1.0);
        assert_eq!(full[0].y, 20.0);
    }
}
