#![forbid(unsafe_code)]

//! Analytics sparklines for WebSTAR.
//!
//! Daily samples are projected into a fixed-size canvas, turned into SVG
//! path data, and hit-tested against the pointer to drive a tooltip.
//!
//! # Key Components
//!
//! - [`project`] / [`project_shared`] - independent and shared scaling
//! - [`nearest_index`] / [`HoverState`] - pointer hit-testing
//! - [`TooltipPlacement`] - anti-clipping tooltip side and anchor
//! - [`line_path`] / [`area_path`] - SVG path data
//! - [`format_compact`] / [`SeriesSummary`] - headline numbers

pub mod format;
pub mod hit_test;
pub mod path;
pub mod projection;
pub mod summary;

pub use format::format_compact;
pub use hit_test::{
    HoverState, HoverTarget, MAX_ANCHOR_PCT, MIN_ANCHOR_PCT, Tooltip, TooltipPlacement,
    TooltipSide, nearest_index, pointer_to_canvas_x,
};
pub use path::{area_path, line_path};
pub use projection::{
    Canvas, CanvasError, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_VERTICAL_MARGIN,
    ProjectedPoint, Sample, SharedProjection, project, project_shared,
};
pub use summary::SeriesSummary;
