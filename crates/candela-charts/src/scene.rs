//! Render output: an ordered display list of painted shapes.
//!
//! Charts never draw; they produce a [`Scene`] a host renderer replays
//! against its drawing surface (or serializes across a process
//! boundary).

use candela_core::{Color, Path, Point};
use serde::{Deserialize, Serialize};

/// How a shape is painted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    /// Filled with a color.
    Fill {
        /// Fill color
        color: Color,
    },
    /// Stroked outline.
    Stroke {
        /// Stroke color
        color: Color,
        /// Stroke width in pixels
        width: f32,
    },
}

/// Shape geometry variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeGeometry {
    /// A vector path.
    Path(Path),
    /// A circle (point markers, explorer dots).
    Circle {
        /// Center
        center: Point,
        /// Radius
        radius: f32,
    },
    /// A straight line (grid lines, explorer indicator).
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
    },
}

/// One painted shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Geometry to draw.
    pub geometry: ShapeGeometry,
    /// Paint to draw it with.
    pub paint: Paint,
    /// Opacity in [0, 1], multiplied over the paint color's alpha.
    pub opacity: f32,
}

/// An ordered list of shapes for one frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded shapes, in draw order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Check if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Number of shapes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Push a filled path, skipping empty paths.
    pub fn fill(&mut self, path: Path, color: Color) {
        self.fill_with_opacity(path, color, 1.0);
    }

    /// Push a filled path with explicit opacity, skipping empty paths.
    pub fn fill_with_opacity(&mut self, path: Path, color: Color, opacity: f32) {
        if path.is_empty() {
            return;
        }
        self.shapes.push(Shape {
            geometry: ShapeGeometry::Path(path),
            paint: Paint::Fill { color },
            opacity,
        });
    }

    /// Push a stroked path, skipping empty paths.
    pub fn stroke(&mut self, path: Path, color: Color, width: f32) {
        self.stroke_with_opacity(path, color, width, 1.0);
    }

    /// Push a stroked path with explicit opacity, skipping empty paths.
    pub fn stroke_with_opacity(&mut self, path: Path, color: Color, width: f32, opacity: f32) {
        if path.is_empty() {
            return;
        }
        self.shapes.push(Shape {
            geometry: ShapeGeometry::Path(path),
            paint: Paint::Stroke { color, width },
            opacity,
        });
    }

    /// Push a filled circle.
    pub fn circle(&mut self, center: Point, radius: f32, color: Color, opacity: f32) {
        self.shapes.push(Shape {
            geometry: ShapeGeometry::Circle { center, radius },
            paint: Paint::Fill { color },
            opacity,
        });
    }

    /// Push a stroked line.
    pub fn line(&mut self, from: Point, to: Point, color: Color, width: f32, opacity: f32) {
        self.shapes.push(Shape {
            geometry: ShapeGeometry::Line { from, to },
            paint: Paint::Stroke { color, width },
            opacity,
        });
    }
}
