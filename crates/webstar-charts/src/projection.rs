#![forbid(unsafe_code)]

//! Map daily samples into sparkline canvas coordinates.
//!
//! Two scaling policies exist and are kept separate:
//!
//! - [`project`] scales one series independently between its own minimum
//!   and maximum, so small day-to-day changes stay visible.
//! - [`project_shared`] scales two series against one shared maximum with an
//!   implicit minimum of zero, so their magnitudes stay comparable.
//!
//! # Invariants
//!
//! 1. Output has one point per input sample, in input order.
//! 2. x is non-decreasing and spans the plot area's horizontal extent.
//! 3. Every y lies within the plot area.
//! 4. Empty, single-sample and flat series never divide by zero.

use std::fmt;

use webstar_core::geometry::{Rect, Sides};

/// Width of the analytics sparkline viewBox.
pub const DEFAULT_CANVAS_WIDTH: f64 = 280.0;
/// Height of the analytics sparkline viewBox.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 64.0;
/// Space kept free above and below the line.
pub const DEFAULT_VERTICAL_MARGIN: f64 = 5.0;

/// One day's value.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Date label as received from the host.
    pub date: String,
    pub value: f64,
}

impl Sample {
    #[must_use]
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

/// A sample in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    /// Index of the source sample.
    pub index: usize,
    /// The sample value this point was projected from.
    pub value: f64,
}

/// Invalid canvas geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasError {
    NonPositiveSize { width: f64, height: f64 },
    PaddingExceedsCanvas,
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSize { width, height } => {
                write!(f, "canvas must have a positive size, got {width}x{height}")
            }
            Self::PaddingExceedsCanvas => write!(f, "canvas padding leaves no plot area"),
        }
    }
}

impl std::error::Error for CanvasError {}

/// Drawing surface for one sparkline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    /// Left/right padding bounds x; top/bottom margins bound y.
    pub padding: Sides,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            padding: Sides::symmetric(DEFAULT_VERTICAL_MARGIN, 0.0),
        }
    }
}

impl Canvas {
    /// Canvas of the given size with the default vertical margins.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Horizontal padding on both sides.
    #[must_use]
    pub fn padding(mut self, px: f64) -> Self {
        self.padding.left = px;
        self.padding.right = px;
        self
    }

    /// Margin above the highest and below the lowest point.
    #[must_use]
    pub fn vertical_margin(mut self, px: f64) -> Self {
        self.padding.top = px;
        self.padding.bottom = px;
        self
    }

    /// Region points are projected into.
    #[must_use]
    pub fn plot_area(&self) -> Rect {
        Rect::from_size(self.width, self.height).inner(&self.padding)
    }

    /// Full canvas bounds.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn validate(&self) -> Result<(), CanvasError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(CanvasError::NonPositiveSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.padding.horizontal() > self.width || self.padding.vertical() > self.height {
            return Err(CanvasError::PaddingExceedsCanvas);
        }
        Ok(())
    }
}

/// Both series of a combined chart, scaled together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SharedProjection {
    pub a: Vec<ProjectedPoint>,
    pub b: Vec<ProjectedPoint>,
    /// The shared maximum both series were scaled against.
    pub max_value: f64,
}

fn step(plot: &Rect, n: usize) -> f64 {
    plot.width / (n.saturating_sub(1).max(1)) as f64
}

fn place(samples: &[Sample], plot: &Rect, normalize: impl Fn(f64) -> f64) -> Vec<ProjectedPoint> {
    let dx = step(plot, samples.len());
    samples
        .iter()
        .enumerate()
        .map(|(i, s)| ProjectedPoint {
            x: plot.x + dx * i as f64,
            y: plot.bottom() - normalize(s.value) * plot.height,
            index: i,
            value: s.value,
        })
        .collect()
}

/// Project one series with independent min/max scaling.
///
/// The maximum is floored at 1 and the range at 1.
#[must_use]
pub fn project(samples: &[Sample], canvas: &Canvas) -> Vec<ProjectedPoint> {
    if samples.is_empty() {
        return Vec::new();
    }
    let max = samples.iter().map(|s| s.value).fold(1.0, f64::max);
    let min = samples.iter().map(|s| s.value).fold(f64::INFINITY, f64::min);
    let range = (max - min).max(1.0);
    if max - min < 1.0 {
        tracing::trace!(samples = samples.len(), min, max, "flat series; range floored to 1");
    }
    place(samples, &canvas.plot_area(), |v| (v - min) / range)
}

/// Project two series against one shared maximum (floored at 1) with an
/// implicit minimum of zero.
#[must_use]
pub fn project_shared(a: &[Sample], b: &[Sample], canvas: &Canvas) -> SharedProjection {
    let max_value = a.iter().chain(b).map(|s| s.value).fold(1.0, f64::max);
    let plot = canvas.plot_area();
    SharedProjection {
        a: place(a, &plot, |v| v / max_value),
        b: place(b, &plot, |v| v / max_value),
        max_value,
    }
}
