//! Inverse geometric queries: pointer position to logical index.
//!
//! Every function here is pure: geometry and a query point in, an index
//! (or no match) out. Gesture discrimination lives with the chart
//! components; these are the primitives they resolve against.

use crate::bar::SegmentBox;
use crate::geometry::{Point, Rect};
use crate::radial::RadialSlice;
use crate::scale::ScreenPoint;

/// Index of the screen point whose X is nearest the query X.
///
/// Binary search over the X-sorted sequence; positions outside the span
/// clamp to the first/last index, and the final adjacent-pair comparison
/// breaks ties toward the lower index.
#[must_use]
pub fn nearest_point_index(screen_x: f32, points: &[ScreenPoint]) -> Option<usize> {
    if points.is_empty() {
        return None;
    }
    if points.len() == 1 || screen_x <= points[0].x {
        return Some(0);
    }
    if screen_x >= points[points.len() - 1].x {
        return Some(points.len() - 1);
    }

    let mut left = 0usize;
    let mut right = points.len() - 1;
    while left <= right {
        let mid = (left + right) / 2;
        let x = points[mid].x;
        if x == screen_x {
            return Some(mid);
        }
        if x < screen_x {
            left = mid + 1;
        } else {
            // `left <= right` held on entry, so `mid >= left >= 1` here:
            // the boundary clamps above handled screen_x <= points[0].x.
            right = mid - 1;
        }
    }

    // The search narrowed to the adjacent pair (right, left).
    let left_dist = (points[left].x - screen_x).abs();
    let right_dist = (points[right].x - screen_x).abs();
    if left_dist < right_dist {
        Some(left)
    } else {
        Some(right)
    }
}

/// First bar rect containing the point.
///
/// Callers pass selection-scaled rects so an expanded bar's hit region
/// expands with it.
#[must_use]
pub fn hit_bar(point: Point, bars: &[Rect]) -> Option<usize> {
    bars.iter().position(|r| r.contains(point))
}

/// Locate the stack segment whose (possibly expansion-scaled) Y-range
/// contains the query Y. The category's X-range must be confirmed first.
///
/// A selected segment's height scales upward from its bottom edge, the
/// same anchoring the renderer uses.
#[must_use]
pub fn hit_stack_segment(
    point_y: f32,
    boxes: &[SegmentBox],
    selected_segment: Option<usize>,
    height_scale: f32,
) -> Option<usize> {
    for (i, seg) in boxes.iter().enumerate() {
        let scaled_height = if selected_segment == Some(i) {
            seg.height * height_scale
        } else {
            seg.height
        };
        let scaled_y = seg.y - (scaled_height - seg.height);
        if point_y >= scaled_y && point_y <= scaled_y + scaled_height {
            return Some(i);
        }
    }
    None
}

/// Normalize an angle in degrees to [0, 360).
#[must_use]
pub fn normalize_angle(angle: f32) -> f32 {
    let normalized = angle % 360.0;
    if normalized < 0.0 {
        normalized + 360.0
    } else {
        normalized
    }
}

/// Check whether an angle falls within an arc, handling wraparound when
/// the arc crosses the 0°/360° boundary. Zero-sweep arcs contain
/// nothing; arcs of 360° or more contain everything.
#[must_use]
pub fn angle_in_arc(angle: f32, start_angle: f32, sweep_angle: f32) -> bool {
    if sweep_angle == 0.0 {
        return false;
    }
    if sweep_angle.abs() >= 360.0 {
        return true;
    }

    let angle = normalize_angle(angle);
    let start = normalize_angle(start_angle);
    let end = normalize_angle(start_angle + sweep_angle);

    if end >= start {
        angle >= start && angle <= end
    } else {
        angle >= start || angle <= end
    }
}

/// Width of the tappable ring: the padded base ring or the
/// selection-expanded stroke, whichever is wider, so the hit region is
/// never smaller than the visible ring.
#[must_use]
pub fn hit_ring_width(stroke_width: f32, hit_padding: f32, expanded_width: f32) -> f32 {
    (stroke_width + hit_padding).max(expanded_width)
}

/// Resolve a point against a radial chart's slices.
///
/// Rejects points whose distance from the center falls outside
/// `[radius − ring_width/2, radius + ring_width/2]`, then tests the
/// point's `atan2` angle against each slice's arc.
#[must_use]
pub fn hit_radial_segment(
    point: Point,
    cx: f32,
    cy: f32,
    radius: f32,
    ring_width: f32,
    slices: &[RadialSlice],
) -> Option<usize> {
    let dx = point.x - cx;
    let dy = point.y - cy;
    let distance = (dx * dx + dy * dy).sqrt();

    let inner = (radius - ring_width / 2.0).max(0.0);
    let outer = radius + ring_width / 2.0;
    if distance < inner || distance > outer {
        return None;
    }

    let angle = normalize_angle(dy.atan2(dx).to_degrees());
    slices.iter().position(|slice| {
        slice.sweep_angle > 0.0 && angle_in_arc(angle, slice.start_angle, slice.sweep_angle)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bar::stack_layout;
    use crate::radial::{radial_layout, RadialLayoutConfig};
    use proptest::prelude::*;

    fn points(xs: &[f32]) -> Vec<ScreenPoint> {
        xs.iter()
            .enumerate()
            .map(|(i, &x)| ScreenPoint::new(x, 0.0, i as i32))
            .collect()
    }

    // =========================================================================
    // Nearest point
    // =========================================================================

    #[test]
    fn test_nearest_empty_and_single() {
        assert_eq!(nearest_point_index(5.0, &[]), None);
        assert_eq!(nearest_point_index(5.0, &points(&[10.0])), Some(0));
    }

    #[test]
    fn test_nearest_clamps_to_span() {
        let pts = points(&[10.0, 20.0, 30.0]);
        assert_eq!(nearest_point_index(-5.0, &pts), Some(0));
        assert_eq!(nearest_point_index(99.0, &pts), Some(2));
    }

    #[test]
    fn test_nearest_exact_hit() {
        let pts = points(&[10.0, 20.0, 30.0]);
        assert_eq!(nearest_point_index(20.0, &pts), Some(1));
    }

    #[test]
    fn test_nearest_tie_breaks_low() {
        let pts = points(&[10.0, 20.0]);
        assert_eq!(nearest_point_index(15.0, &pts), Some(0));
    }

    proptest! {
        #[test]
        fn prop_nearest_minimizes_distance(
            xs in proptest::collection::vec(0.0f32..1000.0, 2..40),
            query in 0.0f32..1000.0,
        ) {
            let mut xs = xs;
            xs.sort_by(|a, b| a.partial_cmp(b).expect("finite"));
            let pts = points(&xs);
            let found = nearest_point_index(query, &pts).expect("non-empty");
            let best = (query - pts[found].x).abs();
            for p in &pts {
                prop_assert!(best <= (query - p.x).abs() + 1e-4);
            }
        }
    }

    // =========================================================================
    // Bars & stacks
    // =========================================================================

    #[test]
    fn test_hit_bar_scan() {
        let bars = vec![
            Rect::new(0.0, 50.0, 20.0, 50.0),
            Rect::new(30.0, 20.0, 20.0, 80.0),
        ];
        assert_eq!(hit_bar(Point::new(10.0, 60.0), &bars), Some(0));
        assert_eq!(hit_bar(Point::new(40.0, 30.0), &bars), Some(1));
        assert_eq!(hit_bar(Point::new(25.0, 60.0), &bars), None);
        // Above the first bar's top edge: no hit.
        assert_eq!(hit_bar(Point::new(10.0, 40.0), &bars), None);
    }

    #[test]
    fn test_hit_stack_segment_walks_heights() {
        let boxes = stack_layout(&[30.0, 30.0, 40.0], 100.0, 0.0, 100.0, 0.0);
        // Baseline is y=100; bottom segment spans [70, 100].
        assert_eq!(hit_stack_segment(90.0, &boxes, None, 1.0), Some(0));
        assert_eq!(hit_stack_segment(50.0, &boxes, None, 1.0), Some(1));
        assert_eq!(hit_stack_segment(10.0, &boxes, None, 1.0), Some(2));
    }

    #[test]
    fn test_hit_stack_selected_segment_expands_region() {
        let boxes = stack_layout(&[50.0, 50.0], 100.0, 0.0, 100.0, 0.0);
        // Top segment spans [0, 50]; scaled 1.2x from its bottom it
        // reaches y = 50 - 60 = -10.
        assert_eq!(hit_stack_segment(-5.0, &boxes, Some(1), 1.2), Some(1));
        assert_eq!(hit_stack_segment(-5.0, &boxes, None, 1.0), None);
    }

    // =========================================================================
    // Radial
    // =========================================================================

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(-90.0), 270.0);
        assert_eq!(normalize_angle(450.0), 90.0);
    }

    #[test]
    fn test_angle_in_arc_wraparound() {
        // One segment from -90° sweeping 180°: the arc [270°, 90°].
        assert!(angle_in_arc(45.0, -90.0, 180.0));
        assert!(angle_in_arc(300.0, -90.0, 180.0));
        assert!(!angle_in_arc(180.0, -90.0, 180.0));
        // Zero sweep matches nothing; full sweep matches everything.
        assert!(!angle_in_arc(0.0, -90.0, 0.0));
        assert!(angle_in_arc(180.0, 0.0, 360.0));
    }

    #[test]
    fn test_hit_ring_width_takes_wider() {
        assert_eq!(hit_ring_width(40.0, 20.0, 55.0), 60.0);
        assert_eq!(hit_ring_width(40.0, 20.0, 75.0), 75.0);
    }

    #[test]
    fn test_hit_radial_segment_distance_gate() {
        let layout = radial_layout(&[1.0], &RadialLayoutConfig::default());
        // Ring at radius 80, width 60: annulus [50, 110] around (100, 100).
        let hit = |x, y| hit_radial_segment(Point::new(x, y), 100.0, 100.0, 80.0, 60.0, &layout.slices);
        assert_eq!(hit(180.0, 100.0), Some(0));
        assert_eq!(hit(100.0, 100.0), None);
        assert_eq!(hit(215.0, 100.0), None);
    }

    #[test]
    fn test_full_ring_every_angle_maps_to_one_segment() {
        // Spec closure property: a 360° layout with no gaps covers every
        // angle with exactly one segment.
        let layout = radial_layout(&[1.0, 2.0, 3.0], &RadialLayoutConfig::default());
        for deg in 0..360 {
            let rad = (deg as f32).to_radians();
            let p = Point::new(100.0 + 80.0 * rad.cos(), 100.0 + 80.0 * rad.sin());
            let matches = layout
                .slices
                .iter()
                .filter(|s| {
                    s.sweep_angle > 0.0
                        && angle_in_arc(
                            normalize_angle((p.y - 100.0).atan2(p.x - 100.0).to_degrees()),
                            s.start_angle,
                            s.sweep_angle,
                        )
                })
                .count();
            // Boundary angles may land in two adjacent closed arcs.
            assert!(
                (1..=2).contains(&matches),
                "angle {deg} matched {matches} segments"
            );
        }
    }

    #[test]
    fn test_gapped_ring_rejects_gap_angles() {
        let layout = radial_layout(
            &[1.0, 1.0],
            &RadialLayoutConfig {
                start_angle: 0.0,
                sweep_angle: 360.0,
                gap_degrees: 20.0,
                closed_loop: true,
                ..RadialLayoutConfig::default()
            },
        );
        // Segments: [0, 160] and [180, 340]; gaps elsewhere.
        let hit_angle = |deg: f32| {
            layout
                .slices
                .iter()
                .position(|s| angle_in_arc(deg, s.start_angle, s.sweep_angle))
        };
        assert_eq!(hit_angle(90.0), Some(0));
        assert_eq!(hit_angle(200.0), Some(1));
        assert_eq!(hit_angle(170.0), None);
        assert_eq!(hit_angle(350.0), None);
    }
}
