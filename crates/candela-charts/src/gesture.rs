//! Gesture recognition from raw pointer events.
//!
//! Discriminates taps from scrubs using explicit thresholds and hands
//! back high-level [`ChartGesture`]s; resolving a gesture position to a
//! bar/point/segment index is the chart's job. No timers run here;
//! durations compare the timestamps carried by the events.

use candela_core::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Thresholds for tap/scrub discrimination, gathered in one place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchConfig {
    /// Maximum travel for a press to still count as a tap (pixels).
    pub tap_max_distance: f32,
    /// Maximum press duration for a tap (milliseconds).
    pub tap_max_duration_ms: f64,
    /// Travel at which a press becomes a scrub (pixels).
    pub scrub_min_distance: f32,
    /// Reject taps whose vertical travel exceeds this multiple of the
    /// horizontal travel (the press was a list scroll, not a tap).
    pub vertical_swipe_ratio: f32,
    /// Vertical travel below this never rejects a tap (pixels).
    pub vertical_swipe_min: f32,
    /// Extra ring width around radial charts' visible stroke that still
    /// accepts taps (pixels).
    pub hit_padding: f32,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            tap_max_distance: 18.0,
            tap_max_duration_ms: 280.0,
            scrub_min_distance: 5.0,
            vertical_swipe_ratio: 1.5,
            vertical_swipe_min: 5.0,
            hit_padding: 20.0,
        }
    }
}

/// Lifecycle phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    /// Contact began.
    Down,
    /// Contact moved.
    Move,
    /// Contact lifted.
    Up,
    /// Contact cancelled by the system.
    Cancel,
}

/// One pointer event from the host input source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Lifecycle phase.
    pub phase: PointerPhase,
    /// X in chart-local coordinates.
    pub x: f32,
    /// Y in chart-local coordinates.
    pub y: f32,
    /// Event timestamp in milliseconds (any monotonic origin).
    pub timestamp_ms: f64,
}

impl PointerEvent {
    /// Create an event.
    #[must_use]
    pub const fn new(phase: PointerPhase, x: f32, y: f32, timestamp_ms: f64) -> Self {
        Self {
            phase,
            x,
            y,
            timestamp_ms,
        }
    }
}

/// A recognized chart gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChartGesture {
    /// A quick press: resolve to an index and select it.
    Tap {
        /// Press X
        x: f32,
        /// Press Y
        y: f32,
    },
    /// Scrubbing began (explorer interactions).
    ScrubBegin {
        /// Current X
        x: f32,
        /// Current Y
        y: f32,
    },
    /// Scrub position moved.
    ScrubMove {
        /// Current X
        x: f32,
        /// Current Y
        y: f32,
    },
    /// Scrubbing ended.
    ScrubEnd,
    /// The press ended without becoming a tap or scrub.
    Cancelled,
}

#[derive(Debug, Clone, Copy)]
struct ActivePress {
    start: Point,
    start_time_ms: f64,
    scrubbing: bool,
}

/// Stateful tap/scrub recognizer for one chart surface.
#[derive(Debug, Default)]
pub struct ChartGestureRecognizer {
    config: TouchConfig,
    press: Option<ActivePress>,
}

impl ChartGestureRecognizer {
    /// Create with default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with explicit thresholds.
    #[must_use]
    pub fn with_config(config: TouchConfig) -> Self {
        Self {
            config,
            press: None,
        }
    }

    /// The active thresholds.
    #[must_use]
    pub fn config(&self) -> &TouchConfig {
        &self.config
    }

    /// Feed one pointer event; returns a gesture when one resolves.
    pub fn process(&mut self, event: &PointerEvent) -> Option<ChartGesture> {
        match event.phase {
            PointerPhase::Down => {
                self.press = Some(ActivePress {
                    start: Point::new(event.x, event.y),
                    start_time_ms: event.timestamp_ms,
                    scrubbing: false,
                });
                None
            }
            PointerPhase::Move => {
                let press = self.press.as_mut()?;
                let travel = press.start.distance(&Point::new(event.x, event.y));
                if press.scrubbing {
                    Some(ChartGesture::ScrubMove {
                        x: event.x,
                        y: event.y,
                    })
                } else if travel >= self.config.scrub_min_distance {
                    press.scrubbing = true;
                    Some(ChartGesture::ScrubBegin {
                        x: event.x,
                        y: event.y,
                    })
                } else {
                    None
                }
            }
            PointerPhase::Up => {
                let press = self.press.take()?;
                if press.scrubbing {
                    return Some(ChartGesture::ScrubEnd);
                }

                let dx = event.x - press.start.x;
                let dy = event.y - press.start.y;
                let travel = (dx * dx + dy * dy).sqrt();
                let duration = event.timestamp_ms - press.start_time_ms;

                let vertical_swipe = dy.abs() > dx.abs() * self.config.vertical_swipe_ratio
                    && dy.abs() > self.config.vertical_swipe_min;

                if travel <= self.config.tap_max_distance
                    && duration <= self.config.tap_max_duration_ms
                    && !vertical_swipe
                {
                    Some(ChartGesture::Tap {
                        x: event.x,
                        y: event.y,
                    })
                } else {
                    Some(ChartGesture::Cancelled)
                }
            }
            PointerPhase::Cancel => {
                let press = self.press.take()?;
                if press.scrubbing {
                    Some(ChartGesture::ScrubEnd)
                } else {
                    Some(ChartGesture::Cancelled)
                }
            }
        }
    }

    /// Drop any in-flight press.
    pub fn reset(&mut self) {
        self.press = None;
    }
}

/// Check whether a release landed outside the chart's bounds, the
/// deselect-on-press-outside trigger.
#[must_use]
pub fn outside_press(point: Point, bounds: Rect) -> bool {
    !bounds.contains(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(x: f32, y: f32, t: f64) -> PointerEvent {
        PointerEvent::new(PointerPhase::Down, x, y, t)
    }
    fn mv(x: f32, y: f32, t: f64) -> PointerEvent {
        PointerEvent::new(PointerPhase::Move, x, y, t)
    }
    fn up(x: f32, y: f32, t: f64) -> PointerEvent {
        PointerEvent::new(PointerPhase::Up, x, y, t)
    }

    #[test]
    fn test_quick_press_is_tap() {
        let mut rec = ChartGestureRecognizer::new();
        assert_eq!(rec.process(&down(50.0, 50.0, 0.0)), None);
        assert_eq!(
            rec.process(&up(52.0, 51.0, 120.0)),
            Some(ChartGesture::Tap { x: 52.0, y: 51.0 })
        );
    }

    #[test]
    fn test_slow_press_is_cancelled() {
        let mut rec = ChartGestureRecognizer::new();
        rec.process(&down(50.0, 50.0, 0.0));
        assert_eq!(
            rec.process(&up(50.0, 50.0, 500.0)),
            Some(ChartGesture::Cancelled)
        );
    }

    #[test]
    fn test_long_travel_is_cancelled() {
        let mut rec = ChartGestureRecognizer::new();
        rec.process(&down(0.0, 0.0, 0.0));
        assert_eq!(
            rec.process(&up(40.0, 0.0, 100.0)),
            Some(ChartGesture::Cancelled)
        );
    }

    #[test]
    fn test_vertical_swipe_rejected() {
        let mut rec = ChartGestureRecognizer::new();
        rec.process(&down(50.0, 50.0, 0.0));
        // 12px down, 2px across: a scroll, not a tap.
        assert_eq!(
            rec.process(&up(52.0, 62.0, 100.0)),
            Some(ChartGesture::Cancelled)
        );
    }

    #[test]
    fn test_small_vertical_travel_still_taps() {
        let mut rec = ChartGestureRecognizer::new();
        rec.process(&down(50.0, 50.0, 0.0));
        assert_eq!(
            rec.process(&up(50.0, 54.0, 100.0)),
            Some(ChartGesture::Tap { x: 50.0, y: 54.0 })
        );
    }

    #[test]
    fn test_scrub_sequence() {
        let mut rec = ChartGestureRecognizer::new();
        rec.process(&down(10.0, 10.0, 0.0));
        assert_eq!(rec.process(&mv(12.0, 10.0, 16.0)), None);
        assert_eq!(
            rec.process(&mv(20.0, 10.0, 32.0)),
            Some(ChartGesture::ScrubBegin { x: 20.0, y: 10.0 })
        );
        assert_eq!(
            rec.process(&mv(30.0, 10.0, 48.0)),
            Some(ChartGesture::ScrubMove { x: 30.0, y: 10.0 })
        );
        assert_eq!(rec.process(&up(30.0, 10.0, 64.0)), Some(ChartGesture::ScrubEnd));
    }

    #[test]
    fn test_events_without_press_ignored() {
        let mut rec = ChartGestureRecognizer::new();
        assert_eq!(rec.process(&mv(10.0, 10.0, 0.0)), None);
        assert_eq!(rec.process(&up(10.0, 10.0, 0.0)), None);
    }

    #[test]
    fn test_outside_press() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(!outside_press(Point::new(50.0, 50.0), bounds));
        assert!(outside_press(Point::new(150.0, 50.0), bounds));
    }
}
