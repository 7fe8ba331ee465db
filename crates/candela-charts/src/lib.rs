//! Chart components for Candela.
//!
//! Each chart type is a plain struct (data plus builder-style
//! configuration) with two pure methods: `render(progress, ...)`
//! produces a [`Scene`] display list for the frame, and `hit_test(...)`
//! resolves a pointer position to a logical index. An external timing
//! source owns the progress scalars; an external input source feeds
//! [`gesture::ChartGestureRecognizer`] with pointer events.
//!
//! The geometric heavy lifting lives in [`candela_core`].

pub mod area_chart;
pub mod bar_chart;
pub mod category_chart;
pub mod data;
pub mod gesture;
pub mod radial_chart;
pub mod scene;
pub mod validate;

pub use area_chart::{AreaChart, ExplorerConfig};
pub use bar_chart::BarChart;
pub use category_chart::{CategoryChart, CategoryHit, CategorySelection};
pub use data::{
    BarDatum, BorderStyle, Category, DataPoint, ItemSelectionStyle, RadialSegment, SelectionStyle,
    StackSegment,
};
pub use gesture::{
    outside_press, ChartGesture, ChartGestureRecognizer, PointerEvent, PointerPhase, TouchConfig,
};
pub use radial_chart::RadialChart;
pub use scene::{Paint, Scene, Shape, ShapeGeometry};
pub use validate::{DataError, ValidationWarning};

// The core geometry types appear throughout the public API.
pub use candela_core::{
    Color, CornerRadius, CurveKind, Easing, Insets, Point, Rect, SelectionExpand,
};
