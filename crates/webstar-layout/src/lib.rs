#![forbid(unsafe_code)]

//! Adaptive grid layout for WebSTAR portfolio tiles.
//!
//! Everything here is a pure function of the current tile list and
//! [`LayoutSettings`]; hosts recompute on every change and render the result.
//!
//! # Key Components
//!
//! - [`AspectTag`] / [`ratio_of`] - named aspect ratios with a total lookup
//! - [`row_span`] - masonry row-span calculator
//! - [`place_tiles`] - uniform/masonry placement with featured-tile rhythm
//! - [`pack_grid`] - auto-flow packing of placed tiles into pixel rectangles
//! - [`EngineConfig`] - fixed engine constants (row unit, reference width)

pub mod aspect;
pub mod config;
pub mod grid;
pub mod placement;
pub mod row_span;
pub mod settings;

pub use aspect::{AspectTag, DEFAULT_RATIO, label_of, ratio_of, ratio_of_str};
pub use config::{ColumnWidth, EngineConfig, EngineConfigError};
pub use grid::{GridCell, GridLayout, pack_grid};
pub use placement::{PlacedTile, Tile, TileId, display_order, place_tiles};
pub use row_span::{MAX_ROW_SPAN, row_span, row_span_for_width, spanned_height};
pub use settings::{LayoutMode, LayoutSettings, MAX_RADIUS_PX, SettingsError};
pub use webstar_core::geometry::{Point, Rect, Sides};
