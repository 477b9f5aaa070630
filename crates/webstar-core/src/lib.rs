#![forbid(unsafe_code)]

//! Core primitives shared by the WebSTAR layout crates.
//!
//! - [`geometry`] - pixel-space rectangles, points, and sides
//! - `logging` - tracing subscriber installation (feature `tracing-json`)

pub mod geometry;
#[cfg(feature = "tracing-json")]
pub mod logging;

pub use geometry::{Point, Rect, Sides};
