#![forbid(unsafe_code)]

//! Grid track packing: resolves placed tiles into pixel rectangles.
//!
//! Mirrors CSS grid "row" auto-flow for single-column items: an
//! auto-placement cursor walks left to right, top to bottom, and each tile
//! lands in the first column/row at or after the cursor where all of its
//! spanned row tracks are free. The cursor then moves to the column after the
//! tile on the tile's start row.
//!
//! Track sizes:
//! - masonry: every row track is `row_unit_px` tall;
//! - uniform: every row track is `column_width / ratio` tall (one tile per
//!   track).
//!
//! # Invariants
//!
//! 1. No two cell rectangles overlap.
//! 2. Every cell lies within `[0, container_width)` horizontally.
//! 3. Placement is deterministic for identical input.
//! 4. Spans are clamped to `1..=MAX_ROW_SPAN`; track arithmetic saturates.

use webstar_core::geometry::{Point, Rect};

use crate::config::EngineConfig;
use crate::placement::{PlacedTile, TileId};
use crate::row_span::MAX_ROW_SPAN;
use crate::settings::{LayoutMode, LayoutSettings};

/// One resolved tile rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub id: TileId,
    pub column: u16,
    pub row: u32,
    pub row_span: u32,
    pub rect: Rect,
}

/// Resolved grid geometry for one layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridLayout {
    pub cells: Vec<GridCell>,
    pub column_width: f64,
    pub track_height: f64,
    pub width: f64,
    pub height: f64,
}

impl GridLayout {
    /// Tile under a pointer, if any. Gaps hit nothing.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<TileId> {
        self.cells
            .iter()
            .find(|cell| cell.rect.contains(point))
            .map(|cell| cell.id)
    }

    /// Rectangle for a tile id.
    #[must_use]
    pub fn rect_of(&self, id: TileId) -> Option<Rect> {
        self.cells.iter().find(|cell| cell.id == id).map(|cell| cell.rect)
    }

    /// Total number of row tracks in use.
    #[must_use]
    pub fn row_count(&self) -> u32 {
        self.cells
            .iter()
            .map(|cell| cell.row.saturating_add(cell.row_span))
            .max()
            .unwrap_or(0)
    }
}

/// Column occupancy, grown lazily as rows are claimed.
struct Occupancy {
    columns: Vec<Vec<bool>>,
}

impl Occupancy {
    fn new(columns: usize) -> Self {
        Self {
            columns: vec![Vec::new(); columns],
        }
    }

    fn is_free(&self, column: usize, row: u32, span: u32) -> bool {
        let rows = &self.columns[column];
        (row..row.saturating_add(span)).all(|r| !rows.get(r as usize).copied().unwrap_or(false))
    }

    fn claim(&mut self, column: usize, row: u32, span: u32) {
        let rows = &mut self.columns[column];
        let end = row.saturating_add(span) as usize;
        if rows.len() < end {
            rows.resize(end, false);
        }
        for slot in &mut rows[row as usize..end] {
            *slot = true;
        }
    }
}

/// Resolve placed tiles (in display order) into rectangles for a container
/// `container_width` pixels wide.
#[must_use]
pub fn pack_grid(
    placed: &[PlacedTile],
    settings: &LayoutSettings,
    config: &EngineConfig,
    container_width: f64,
) -> GridLayout {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "pack_grid",
        tiles = placed.len(),
        columns = settings.columns,
        container_width
    )
    .entered();

    let columns = usize::from(settings.columns.max(1));
    let gap = settings.gap_px.max(0.0);
    let column_width =
        ((container_width.max(0.0) - gap * (columns as f64 - 1.0)) / columns as f64).max(0.0);
    let track_height = match settings.mode {
        LayoutMode::Masonry => config.row_unit_px,
        LayoutMode::Uniform => column_width / settings.global_aspect.ratio(),
    };

    let mut occupancy = Occupancy::new(columns);
    let mut cells = Vec::with_capacity(placed.len());
    let (mut cursor_row, mut cursor_col) = (0u32, 0usize);

    for tile in placed {
        let span = match settings.mode {
            LayoutMode::Masonry => tile.row_span.clamp(1, MAX_ROW_SPAN),
            LayoutMode::Uniform => 1,
        };
        loop {
            if cursor_col >= columns {
                cursor_col = 0;
                cursor_row = cursor_row.saturating_add(1);
            }
            if occupancy.is_free(cursor_col, cursor_row, span) {
                break;
            }
            cursor_col += 1;
        }
        occupancy.claim(cursor_col, cursor_row, span);

        let x = cursor_col as f64 * (column_width + gap);
        let y = f64::from(cursor_row) * (track_height + gap);
        let height = f64::from(span) * track_height + f64::from(span - 1) * gap;
        cells.push(GridCell {
            id: tile.id,
            column: cursor_col as u16,
            row: cursor_row,
            row_span: span,
            rect: Rect::new(x, y, column_width, height),
        });
        cursor_col += 1;
    }

    let height = cells.iter().map(|c| c.rect.bottom()).fold(0.0, f64::max);
    GridLayout {
        cells,
        column_width,
        track_height,
        width: container_width.max(0.0),
        height,
    }
}
