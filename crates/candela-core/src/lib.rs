//! Geometry, path generation, and hit-testing engine for Candela charts.
//!
//! This crate is the pure core shared by every chart type:
//! - Scale & layout: [`scale::nice_scale`], [`scale::ChartFrame`],
//!   [`scale::slot_layout`]
//! - Curves: [`curve::line_path`], [`curve::area_path`], monotone cubic
//!   interpolation and Y-at-X queries
//! - Bars: [`bar::bar_path`], [`bar::border_path`], [`bar::stack_layout`]
//! - Radial: [`radial::sector_path`], [`radial::radial_layout`]
//! - Hit testing: [`hittest::nearest_point_index`],
//!   [`hittest::hit_radial_segment`]
//!
//! Everything is a pure function of its arguments: no I/O, no globals,
//! no interior mutability. Animation progress arrives as a plain
//! parameter owned by the caller's timing source.

pub mod bar;
pub mod color;
pub mod curve;
pub mod geometry;
pub mod hittest;
pub mod path;
pub mod radial;
pub mod reveal;
pub mod scale;

pub use bar::{bar_path, border_path, stack_layout, SegmentBox};
pub use color::{Color, ColorParseError};
pub use curve::{area_path, line_path, CurveKind};
pub use geometry::{CornerRadius, Corners, Insets, Point, Rect, StackPosition};
pub use hittest::{hit_radial_segment, nearest_point_index};
pub use path::{Path, PathCommand};
pub use radial::{
    expand_sector, radial_layout, sector_path, ArcSector, RadialLayout, RadialLayoutConfig,
    RadialSlice, SelectionExpand,
};
pub use reveal::{local_progress, reveal_window, Easing};
pub use scale::{nice_scale, slot_layout, AxisScale, ChartFrame, DataRange, ScreenPoint, SlotLayout};
