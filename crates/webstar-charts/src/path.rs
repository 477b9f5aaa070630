#![forbid(unsafe_code)]

//! SVG path data for sparklines.
//!
//! The line runs edge to edge: it starts at `x = 0` level with the first
//! point and ends at `x = width` level with the last, whatever the padding.
//! The area variant closes along the canvas bottom for a gradient fill.

use std::fmt::Write as _;

use crate::projection::{Canvas, ProjectedPoint};

fn coord(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Path data for the sparkline stroke. An empty series draws a flat line at
/// mid-height.
#[must_use]
pub fn line_path(points: &[ProjectedPoint], canvas: &Canvas) -> String {
    let mid = canvas.height / 2.0;
    let first_y = points.first().map_or(mid, |p| p.y);
    let last_y = points.last().map_or(mid, |p| p.y);

    let mut d = format!("M 0,{}", coord(first_y));
    for p in points {
        let _ = write!(d, " L {},{}", coord(p.x), coord(p.y));
    }
    let _ = write!(d, " L {},{}", coord(canvas.width), coord(last_y));
    d
}

/// Path data for the filled area under the sparkline.
#[must_use]
pub fn area_path(points: &[ProjectedPoint], canvas: &Canvas) -> String {
    let mut d = line_path(points, canvas);
    let (w, h) = (coord(canvas.width), coord(canvas.height));
    let _ = write!(d, " L {w},{h} L 0,{h} Z");
    d
}
