#![forbid(unsafe_code)]

//! Pointer hit-testing and tooltip placement for sparklines.
//!
//! # Invariants
//!
//! 1. [`nearest_index`] picks the minimal `|pointer_x - x|`; ties go to the
//!    lowest index.
//! 2. Tooltips open toward the side with more room: right of the point when
//!    it sits in the left half, left otherwise.
//! 3. The tooltip anchor stays within 15%–85% of the canvas width.
//! 4. Leaving the canvas clears the hover.

use crate::projection::{Canvas, ProjectedPoint, Sample};

/// Lowest tooltip anchor, as a percentage of canvas width.
pub const MIN_ANCHOR_PCT: f64 = 15.0;
/// Highest tooltip anchor, as a percentage of canvas width.
pub const MAX_ANCHOR_PCT: f64 = 85.0;

/// Index of the point horizontally closest to `pointer_x`.
///
/// Returns `None` for an empty slice or a NaN pointer.
#[must_use]
pub fn nearest_index(points: &[ProjectedPoint], pointer_x: f64) -> Option<usize> {
    if pointer_x.is_nan() {
        return None;
    }
    let mut best: Option<(usize, f64)> = None;
    for (i, point) in points.iter().enumerate() {
        let distance = (pointer_x - point.x).abs();
        match best {
            Some((_, nearest)) if distance >= nearest => {}
            _ => best = Some((i, distance)),
        }
    }
    best.map(|(i, _)| i)
}

/// Map a DOM pointer position to canvas x.
///
/// Returns `None` when the rendered element has no width.
#[must_use]
pub fn pointer_to_canvas_x(client_x: f64, rect_left: f64, rect_width: f64, canvas: &Canvas) -> Option<f64> {
    (rect_width > 0.0).then(|| (client_x - rect_left) / rect_width * canvas.width)
}

/// Which side of the point the tooltip opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TooltipSide {
    Left,
    Right,
}

impl TooltipSide {
    /// Side for a point at `fraction` of the canvas width.
    #[must_use]
    pub fn for_fraction(fraction: f64) -> Self {
        if fraction < 0.5 { Self::Right } else { Self::Left }
    }
}

/// Where to draw the tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPlacement {
    pub side: TooltipSide,
    /// Horizontal anchor, percent of canvas width, clamped to 15..=85.
    pub anchor_pct: f64,
}

impl TooltipPlacement {
    #[must_use]
    pub fn for_x(x: f64, canvas: &Canvas) -> Self {
        let fraction = if canvas.width > 0.0 { x / canvas.width } else { 0.0 };
        Self {
            side: TooltipSide::for_fraction(fraction),
            anchor_pct: (fraction * 100.0).clamp(MIN_ANCHOR_PCT, MAX_ANCHOR_PCT),
        }
    }
}

/// Tooltip content for one day. Both series are read at the same index.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub index: usize,
    pub date: String,
    pub views: f64,
    pub clicks: f64,
}

impl Tooltip {
    /// Content for `index`. A clicks series shorter than views reads as 0.
    #[must_use]
    pub fn at(index: usize, views: &[Sample], clicks: &[Sample]) -> Option<Self> {
        let day = views.get(index)?;
        Some(Self {
            index,
            date: day.date.clone(),
            views: day.value,
            clicks: clicks.get(index).map_or(0.0, |s| s.value),
        })
    }
}

/// The point currently under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverTarget {
    pub index: usize,
    pub point: ProjectedPoint,
    pub placement: TooltipPlacement,
}

/// Hover state for one sparkline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoverState {
    target: Option<HoverTarget>,
}

impl HoverState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Track the pointer at canvas `pointer_x`.
    pub fn pointer_move(
        &mut self,
        points: &[ProjectedPoint],
        pointer_x: f64,
        canvas: &Canvas,
    ) -> Option<HoverTarget> {
        self.target = nearest_index(points, pointer_x).map(|index| {
            let point = points[index];
            HoverTarget {
                index,
                point,
                placement: TooltipPlacement::for_x(point.x, canvas),
            }
        });
        self.target
    }

    /// Pointer left the canvas.
    pub fn pointer_leave(&mut self) {
        self.target = None;
    }

    #[must_use]
    pub fn current(&self) -> Option<HoverTarget> {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_x(xs: &[f64]) -> Vec<ProjectedPoint> {
        xs.iter()
            .enumerate()
            .map(|(index, &x)| ProjectedPoint { x, y: 0.0, index, value: 0.0 })
            .collect()
    }

    #[test]
    fn nearest_point() {
        let points = at_x(&[10.0, 50.0, 90.0]);
        assert_eq!(nearest_index(&points, 45.0), Some(1));
        assert_eq!(nearest_index(&points, -100.0), Some(0));
        assert_eq!(nearest_index(&points, 1_000.0), Some(2));
    }

    #[test]
    fn ties_go_to_first() {
        let points = at_x(&[10.0, 50.0, 90.0]);
        assert_eq!(nearest_index(&points, 30.0), Some(0));
        assert_eq!(nearest_index(&points, 70.0), Some(1));
    }

    #[test]
    fn empty_or_nan_has_no_target() {
        assert_eq!(nearest_index(&[], 10.0), None);
        assert_eq!(nearest_index(&at_x(&[1.0]), f64::NAN), None);
    }

    #[test]
    fn tooltip_side_by_fraction() {
        assert_eq!(TooltipSide::for_fraction(0.2), TooltipSide::Right);
        assert_eq!(TooltipSide::for_fraction(0.8), TooltipSide::Left);
        assert_eq!(TooltipSide::for_fraction(0.5), TooltipSide::Left);
    }

    #[test]
    fn anchor_is_clamped() {
        let canvas = Canvas::default();
        assert_eq!(TooltipPlacement::for_x(0.0, &canvas).anchor_pct, 15.0);
        assert_eq!(TooltipPlacement::for_x(140.0, &canvas).anchor_pct, 50.0);
        assert_eq!(TooltipPlacement::for_x(280.0, &canvas).anchor_pct, 85.0);
    }

    #[test]
    fn pointer_maps_to_canvas_space() {
        let canvas = Canvas::default();
        assert_eq!(pointer_to_canvas_x(150.0, 10.0, 560.0, &canvas), Some(70.0));
        assert_eq!(pointer_to_canvas_x(150.0, 10.0, 0.0, &canvas), None);
    }

    #[test]
    fn tooltip_reads_both_series() {
        let views = vec![Sample::new("Mon", 3.0), Sample::new("Tue", 9.0)];
        let clicks = vec![Sample::new("Mon", 1.0)];
        let tip = Tooltip::at(1, &views, &clicks).unwrap();
        assert_eq!(tip.date, "Tue");
        assert_eq!(tip.views, 9.0);
        assert_eq!(tip.clicks, 0.0);
        assert_eq!(Tooltip::at(2, &views, &clicks), None);
    }

    #[test]
    fn hover_tracks_and_clears() {
        let canvas = Canvas::default();
        let points = at_x(&[0.0, 140.0, 280.0]);
        let mut hover = HoverState::new();
        let target = hover.pointer_move(&points, 250.0, &canvas).unwrap();
        assert_eq!(target.index, 2);
        assert_eq!(target.placement.side, TooltipSide::Left);
        assert_eq!(hover.current(), Some(target));
        hover.pointer_leave();
        assert_eq!(hover.current(), None);
        assert_eq!(hover.pointer_move(&[], 10.0, &canvas), None);
    }
}
