#![forbid(unsafe_code)]

//! Layout telemetry snapshots for debug overlays.
//!
//! These snapshots provide a low-overhead, in-memory view of the most recent
//! placement and reorder decisions so hosts can render a diagnostics panel
//! without scraping logs. Sessions only record when telemetry is enabled on
//! them.

use std::sync::{LazyLock, RwLock};

use webstar_layout::{LayoutMode, PlacedTile, TileId};

/// Snapshot of the most recent placement.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementSnapshot {
    pub tile_count: usize,
    pub mode: LayoutMode,
    pub columns: u16,
    pub featured_count: usize,
    pub total_row_span: u64,
}

impl PlacementSnapshot {
    /// Summarize a placement result.
    #[must_use]
    pub fn from_placed(placed: &[PlacedTile], mode: LayoutMode, columns: u16) -> Self {
        Self {
            tile_count: placed.len(),
            mode,
            columns,
            featured_count: placed.iter().filter(|t| t.featured).count(),
            total_row_span: placed.iter().map(|t| u64::from(t.row_span)).sum(),
        }
    }
}

/// Snapshot of the most recent drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderSnapshot {
    pub dragged: TileId,
    pub target: TileId,
    /// Whether both tiles were found and exchanged.
    pub swapped: bool,
}

static PLACEMENT_SNAPSHOT: LazyLock<RwLock<Option<PlacementSnapshot>>> =
    LazyLock::new(|| RwLock::new(None));
static REORDER_SNAPSHOT: LazyLock<RwLock<Option<ReorderSnapshot>>> =
    LazyLock::new(|| RwLock::new(None));

/// Serializes tests that touch the process-wide snapshots.
#[cfg(test)]
pub(crate) static TELEMETRY_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Store the latest placement snapshot.
pub fn set_placement_snapshot(snapshot: Option<PlacementSnapshot>) {
    if let Ok(mut guard) = PLACEMENT_SNAPSHOT.write() {
        *guard = snapshot;
    }
}

/// Fetch the latest placement snapshot.
#[must_use]
pub fn placement_snapshot() -> Option<PlacementSnapshot> {
    PLACEMENT_SNAPSHOT.read().ok().and_then(|guard| guard.clone())
}

/// Clear any stored placement snapshot.
pub fn clear_placement_snapshot() {
    set_placement_snapshot(None);
}

/// Store the latest reorder snapshot.
pub fn set_reorder_snapshot(snapshot: Option<ReorderSnapshot>) {
    if let Ok(mut guard) = REORDER_SNAPSHOT.write() {
        *guard = snapshot;
    }
}

/// Fetch the latest reorder snapshot.
#[must_use]
pub fn reorder_snapshot() -> Option<ReorderSnapshot> {
    REORDER_SNAPSHOT.read().ok().and_then(|guard| *guard)
}

/// Clear any stored reorder snapshot.
pub fn clear_reorder_snapshot() {
    set_reorder_snapshot(None);
}
