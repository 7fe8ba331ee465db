//! Entrance-animation support: staggered reveal windows and easing.
//!
//! The animation driver lives outside this crate and supplies a global
//! progress scalar in [0, 1] once per frame; these helpers carve that
//! scalar into per-item timelines.

use crate::curve::{cubic_at, solve_cubic_for_t};
use serde::{Deserialize, Serialize};

/// Sub-range of global progress owned by item `index`, when items start
/// staggered but all finish together.
///
/// `stagger` is the fraction of the timeline separating adjacent starts:
/// item `i` begins at `i · stagger` (capped at 1) and runs to 1. A
/// stagger of 0 gives every item the full timeline.
#[must_use]
pub fn reveal_window(index: usize, stagger: f32) -> (f32, f32) {
    let start = (index as f32 * stagger.max(0.0)).min(1.0);
    (start, 1.0)
}

/// Map global progress into an item's local [0, 1] reveal: 0 before its
/// window, 1 after, linear within.
#[must_use]
pub fn local_progress(global: f32, start: f32, end: f32) -> f32 {
    if global <= start {
        return 0.0;
    }
    if global >= end {
        return 1.0;
    }
    let span = end - start;
    if span > 0.0 {
        (global - start) / span
    } else {
        0.0
    }
}

/// Easing applied to raw timeline progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    /// Identity.
    Linear,
    /// CSS-style cubic Bézier through (0,0), (x1,y1), (x2,y2), (1,1).
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// The standard entrance curve charts animate with.
    pub const STANDARD: Self = Self::CubicBezier(0.25, 0.1, 0.25, 1.0);

    /// Evaluate the easing at time `t` in [0, 1].
    ///
    /// For Bézier easing the X polynomial is inverted by Newton
    /// iteration, then Y evaluated at the recovered parameter.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicBezier(x1, y1, x2, y2) => {
                let param = solve_cubic_for_t(t, t, 0.0, x1, x2, 1.0);
                cubic_at(param, 0.0, y1, y2, 1.0)
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::STANDARD
    }
}
