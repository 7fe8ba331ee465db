//! Vector path descriptions consumed by an external drawing surface.
//!
//! All chart geometry reduces to a [`Path`]: an ordered list of
//! [`PathCommand`]s that a host renderer replays, or serializes across a
//! process boundary. [`Path::to_svg`] provides the equivalent SVG
//! path-data encoding.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// A single path-building instruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    /// Begin a new subpath at the given point.
    MoveTo(Point),
    /// Straight line to the given point.
    LineTo(Point),
    /// Quadratic Bézier through one control point.
    QuadTo {
        /// Control point
        ctrl: Point,
        /// End point
        to: Point,
    },
    /// Cubic Bézier through two control points.
    CubicTo {
        /// First control point
        ctrl1: Point,
        /// Second control point
        ctrl2: Point,
        /// End point
        to: Point,
    },
    /// Elliptical arc in SVG endpoint parameterization.
    ArcTo {
        /// X radius
        rx: f32,
        /// Y radius
        ry: f32,
        /// Draw the longer of the two candidate arcs.
        large_arc: bool,
        /// Sweep in the positive-angle (clockwise in screen space)
        /// direction.
        sweep: bool,
        /// End point
        to: Point,
    },
    /// Close the current subpath.
    Close,
}

/// An ordered sequence of path commands.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path holds no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Begin a new subpath.
    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    /// Straight line to (x, y).
    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    /// Quadratic Bézier to (x, y) through the control point (cx, cy).
    pub fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) -> &mut Self {
        self.commands.push(PathCommand::QuadTo {
            ctrl: Point::new(cx, cy),
            to: Point::new(x, y),
        });
        self
    }

    /// Cubic Bézier to (x, y) through two control points.
    pub fn cubic_to(
        &mut self,
        c1x: f32,
        c1y: f32,
        c2x: f32,
        c2y: f32,
        x: f32,
        y: f32,
    ) -> &mut Self {
        self.commands.push(PathCommand::CubicTo {
            ctrl1: Point::new(c1x, c1y),
            ctrl2: Point::new(c2x, c2y),
            to: Point::new(x, y),
        });
        self
    }

    /// Circular arc of radius `r` to (x, y).
    pub fn arc_to(&mut self, r: f32, large_arc: bool, sweep: bool, x: f32, y: f32) -> &mut Self {
        self.commands.push(PathCommand::ArcTo {
            rx: r,
            ry: r,
            large_arc,
            sweep,
            to: Point::new(x, y),
        });
        self
    }

    /// Close the current subpath.
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// The point the path currently sits at, if any.
    #[must_use]
    pub fn current_point(&self) -> Option<Point> {
        self.commands.iter().rev().find_map(|cmd| match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::QuadTo { to, .. }
            | PathCommand::CubicTo { to, .. }
            | PathCommand::ArcTo { to, .. } => Some(to),
            PathCommand::Close => None,
        })
    }

    /// Encode as SVG path data.
    #[must_use]
    pub fn to_svg(&self) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        for cmd in &self.commands {
            if !out.is_empty() {
                out.push(' ');
            }
            // Infallible writes into a String.
            let _ = match *cmd {
                PathCommand::MoveTo(p) => write!(out, "M {} {}", p.x, p.y),
                PathCommand::LineTo(p) => write!(out, "L {} {}", p.x, p.y),
                PathCommand::QuadTo { ctrl, to } => {
                    write!(out, "Q {} {} {} {}", ctrl.x, ctrl.y, to.x, to.y)
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => write!(
                    out,
                    "C {} {} {} {} {} {}",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                ),
                PathCommand::ArcTo {
                    rx,
                    ry,
                    large_arc,
                    sweep,
                    to,
                } => write!(
                    out,
                    "A {} {} 0 {} {} {} {}",
                    rx,
                    ry,
                    u8::from(large_arc),
                    u8::from(sweep),
                    to.x,
                    to.y
                ),
                PathCommand::Close => write!(out, "Z"),
            };
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path() {
        let path = Path::new();
        assert!(path.is_empty());
        assert_eq!(path.to_svg(), "");
        assert!(path.current_point().is_none());
    }

    #[test]
    fn test_builder_chain() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0)
            .line_to(10.0, 0.0)
            .quad_to(10.0, 10.0, 0.0, 10.0)
            .close();
        assert_eq!(path.len(), 4);
        assert_eq!(path.to_svg(), "M 0 0 L 10 0 Q 10 10 0 10 Z");
    }

    #[test]
    fn test_arc_flags_encode_as_bits() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0).arc_to(5.0, true, false, 10.0, 0.0);
        assert_eq!(path.to_svg(), "M 0 0 A 5 5 0 1 0 10 0");
    }

    #[test]
    fn test_current_point_tracks_last_command() {
        let mut path = Path::new();
        path.move_to(1.0, 2.0).cubic_to(0.0, 0.0, 1.0, 1.0, 3.0, 4.0);
        assert_eq!(path.current_point(), Some(Point::new(3.0, 4.0)));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0).arc_to(2.0, false, true, 4.0, 0.0);
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
