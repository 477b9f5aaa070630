#![forbid(unsafe_code)]

//! Masonry row-span calculation.
//!
//! A masonry tile is given its height by spanning `n` fixed-height row
//! tracks. Between every pair of spanned tracks the grid inserts one gap, so
//! a tile spanning `n` rows is `n * row_unit + (n - 1) * gap` pixels tall.
//! Solving for the smallest `n` that reaches the desired height gives
//!
//! ```text
//! n = ceil((desired + gap) / (row_unit + gap))
//! ```
//!
//! # Invariants
//!
//! 1. The result is always at least 1.
//! 2. For fixed columns and gap, the result is non-increasing in `ratio`
//!    (wider tiles are never taller).
//! 3. The result never exceeds [`MAX_ROW_SPAN`].
//!
//! # Failure Modes
//!
//! None for valid input. `row_unit_px` must be positive; that is guaranteed
//! by [`EngineConfig::validate`](crate::EngineConfig::validate). Non-positive
//! or non-finite ratios fall back to a span of 1.

use crate::config::DEFAULT_REFERENCE_WIDTH_PX;

/// Upper bound on the rows one tile may span. Vanishingly small ratios
/// would otherwise ask for billions of tracks.
pub const MAX_ROW_SPAN: u32 = 4_096;

/// Row span for a tile of `ratio` in a grid of `columns`, estimating the
/// column width from the 400px reference container.
#[must_use]
pub fn row_span(ratio: f64, columns: u16, gap_px: f64, row_unit_px: f64) -> u32 {
    let column_width = DEFAULT_REFERENCE_WIDTH_PX / f64::from(columns.max(1));
    row_span_for_width(ratio, column_width, gap_px, row_unit_px)
}

/// Row span for a tile of `ratio` in a column that is `column_width_px` wide.
#[must_use]
pub fn row_span_for_width(ratio: f64, column_width_px: f64, gap_px: f64, row_unit_px: f64) -> u32 {
    if !(ratio > 0.0 && ratio.is_finite()) {
        return 1;
    }
    let gap = gap_px.max(0.0);
    let track = row_unit_px + gap;
    if track <= 0.0 {
        return 1;
    }
    let desired_height = column_width_px.max(0.0) / ratio;
    let span = ((desired_height + gap) / track).ceil();
    if span.is_finite() && span >= 1.0 {
        span.min(f64::from(MAX_ROW_SPAN)) as u32
    } else {
        1
    }
}

/// Pixel height of a tile spanning `span` rows.
#[must_use]
pub fn spanned_height(span: u32, gap_px: f64, row_unit_px: f64) -> f64 {
    let span = f64::from(span.max(1));
    span * row_unit_px + (span - 1.0) * gap_px.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_in_three_columns() {
        // 400/3 = 133.33px wide, /0.8 = 166.67px tall, gap 4, unit 10
        // ceil((166.67 + 4) / 14) = ceil(12.19) = 13
        assert_eq!(row_span(0.8, 3, 4.0, 10.0), 13);
    }

    #[test]
    fn square_without_gap() {
        // 400/4 = 100px, /1.0 = 100px, unit 10 → exactly 10
        assert_eq!(row_span(1.0, 4, 0.0, 10.0), 10);
    }

    #[test]
    fn spanned_height_covers_desired() {
        for columns in 1..=4u16 {
            for gap in [0.0, 4.0, 16.0] {
                for ratio in [0.5, 0.66, 0.8, 1.0, 1.777] {
                    let span = row_span(ratio, columns, gap, 10.0);
                    let desired = 400.0 / f64::from(columns) / ratio;
                    let height = spanned_height(span, gap, 10.0);
                    assert!(height + 1e-9 >= desired, "span {span} too short");
                    // One fewer row would fall short (modulo rounding).
                    if span > 1 {
                        assert!(spanned_height(span - 1, gap, 10.0) < desired + 1e-6);
                    }
                }
            }
        }
    }

    #[test]
    fn very_wide_tile_floors_at_one() {
        assert_eq!(row_span(1_000.0, 4, 16.0, 10.0), 1);
    }

    #[test]
    fn degenerate_inputs_fall_back_to_one() {
        assert_eq!(row_span(0.0, 3, 4.0, 10.0), 1);
        assert_eq!(row_span(-1.0, 3, 4.0, 10.0), 1);
        assert_eq!(row_span(f64::NAN, 3, 4.0, 10.0), 1);
        assert_eq!(row_span_for_width(1.0, 100.0, 0.0, 0.0), 1);
    }

    #[test]
    fn tiny_ratio_is_capped() {
        assert_eq!(row_span_for_width(1e-9, 400.0, 4.0, 10.0), MAX_ROW_SPAN);
        assert_eq!(row_span(f64::MIN_POSITIVE, 1, 0.0, 10.0), MAX_ROW_SPAN);
    }

    #[test]
    fn zero_columns_treated_as_one() {
        assert_eq!(row_span(1.0, 0, 0.0, 10.0), row_span(1.0, 1, 0.0, 10.0));
    }

    #[test]
    fn measured_width_scales_span() {
        let narrow = row_span_for_width(0.8, 100.0, 4.0, 10.0);
        let wide = row_span_for_width(0.8, 300.0, 4.0, 10.0);
        assert!(wide > narrow);
    }
}
