#![forbid(unsafe_code)]

//! Grid/masonry placement: turns a tile list plus settings into per-tile
//! layout descriptions.
//!
//! # Modes
//!
//! - **Uniform**: tiles keep storage order, all share
//!   `ratio_of(settings.global_aspect)` and span a single row.
//! - **Masonry**: tiles are displayed most-recent-first (reverse storage
//!   order). Every `featured_period`-th displayed tile (index 0, 5, 10, ...)
//!   is featured and forced to `featured_ratio`; the rest use their own tag.
//!   Row spans come from [`row_span_for_width`].
//!
//! # Invariants
//!
//! 1. Output length equals input length; ids are preserved.
//! 2. Uniform mode: every `row_span == 1`.
//! 3. Masonry mode: exactly `ceil(N / period)` tiles are featured.
//! 4. The input slice is never mutated.

use std::fmt;

use crate::aspect::{AspectTag, ratio_of};
use crate::config::EngineConfig;
use crate::row_span::row_span_for_width;
use crate::settings::{LayoutMode, LayoutSettings};

/// Stable portfolio item identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u64);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One portfolio item to lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub id: TileId,
    /// Stored size choice; only consulted in masonry mode.
    pub aspect: Option<AspectTag>,
    /// The item's persisted `order` value. Stored values need not be
    /// contiguous; `None` means the storage index stands in for it.
    pub order: Option<u32>,
}

impl Tile {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self {
            id: TileId(id),
            aspect: None,
            order: None,
        }
    }

    #[must_use]
    pub const fn with_aspect(mut self, tag: AspectTag) -> Self {
        self.aspect = Some(tag);
        self
    }

    #[must_use]
    pub const fn with_order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }
}

/// Derived layout for one tile. Recomputed on every settings or list change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedTile {
    pub id: TileId,
    pub column_span: u32,
    pub row_span: u32,
    pub aspect_ratio: f64,
    pub featured: bool,
}

/// Place tiles for the given settings.
///
/// The result is in display order.
#[must_use]
pub fn place_tiles(tiles: &[Tile], settings: &LayoutSettings, config: &EngineConfig) -> Vec<PlacedTile> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "place_tiles",
        tiles = tiles.len(),
        mode = settings.mode.as_str(),
        columns = settings.columns
    )
    .entered();

    match settings.mode {
        LayoutMode::Uniform => place_uniform(tiles, settings),
        LayoutMode::Masonry => place_masonry(tiles, settings, config),
    }
}

fn place_uniform(tiles: &[Tile], settings: &LayoutSettings) -> Vec<PlacedTile> {
    let ratio = settings.global_aspect.ratio();
    tiles
        .iter()
        .map(|tile| PlacedTile {
            id: tile.id,
            column_span: 1,
            row_span: 1,
            aspect_ratio: ratio,
            featured: false,
        })
        .collect()
}

fn place_masonry(tiles: &[Tile], settings: &LayoutSettings, config: &EngineConfig) -> Vec<PlacedTile> {
    let period = config.featured_period.max(1);
    let column_width = config.column_width_px(settings.columns, settings.gap_px);
    tiles
        .iter()
        .rev()
        .enumerate()
        .map(|(display_idx, tile)| {
            let featured = display_idx % period == 0;
            let ratio = if featured {
                config.featured_ratio
            } else {
                ratio_of(tile.aspect)
            };
            PlacedTile {
                id: tile.id,
                column_span: 1,
                row_span: row_span_for_width(ratio, column_width, settings.gap_px, config.row_unit_px),
                aspect_ratio: ratio,
                featured,
            }
        })
        .collect()
}

/// Display order of tile ids for the given mode.
#[must_use]
pub fn display_order(tiles: &[Tile], mode: LayoutMode) -> Vec<TileId> {
    match mode {
        LayoutMode::Uniform => tiles.iter().map(|t| t.id).collect(),
        LayoutMode::Masonry => tiles.iter().rev().map(|t| t.id).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row_span::row_span;

    fn tiles(n: u64) -> Vec<Tile> {
        (1..=n).map(Tile::new).collect()
    }

    #[test]
    fn uniform_keeps_order_and_single_rows() {
        let list = vec![
            Tile::new(1).with_aspect(AspectTag::Wide16x9),
            Tile::new(2).with_aspect(AspectTag::Tall4x6),
            Tile::new(3),
        ];
        let settings = LayoutSettings::new()
            .mode(LayoutMode::Uniform)
            .global_aspect(AspectTag::Square);
        let placed = place_tiles(&list, &settings, &EngineConfig::default());
        let ids: Vec<_> = placed.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(placed.iter().all(|p| p.row_span == 1 && p.aspect_ratio == 1.0));
        assert!(placed.iter().all(|p| !p.featured && p.column_span == 1));
    }

    #[test]
    fn masonry_reverses_display_order() {
        let placed = place_tiles(&tiles(4), &LayoutSettings::default(), &EngineConfig::default());
        let ids: Vec<_> = placed.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn masonry_features_every_fifth() {
        let placed = place_tiles(&tiles(11), &LayoutSettings::default(), &EngineConfig::default());
        let featured: Vec<_> = placed
            .iter()
            .enumerate()
            .filter(|(_, p)| p.featured)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(featured, vec![0, 5, 10]);
        for p in placed.iter().filter(|p| p.featured) {
            assert_eq!(p.aspect_ratio, 0.5);
        }
    }

    #[test]
    fn featured_overrides_stored_tag() {
        let list = vec![Tile::new(1).with_aspect(AspectTag::Wide16x9)];
        let placed = place_tiles(&list, &LayoutSettings::default(), &EngineConfig::default());
        assert!(placed[0].featured);
        assert_eq!(placed[0].aspect_ratio, 0.5);
    }

    #[test]
    fn masonry_row_spans_match_calculator() {
        let list = vec![
            Tile::new(1).with_aspect(AspectTag::Square),
            Tile::new(2).with_aspect(AspectTag::Wide16x9),
            Tile::new(3),
        ];
        let settings = LayoutSettings::new().columns(4).gap(8.0);
        let placed = place_tiles(&list, &settings, &EngineConfig::default());
        // Displayed: 3 (featured), 2, 1
        assert_eq!(placed[0].row_span, row_span(0.5, 4, 8.0, 10.0));
        assert_eq!(placed[1].row_span, row_span(1.777, 4, 8.0, 10.0));
        assert_eq!(placed[2].row_span, row_span(1.0, 4, 8.0, 10.0));
    }

    #[test]
    fn input_untouched() {
        let list = tiles(6);
        let before = list.clone();
        let _ = place_tiles(&list, &LayoutSettings::default(), &EngineConfig::default());
        assert_eq!(list, before);
    }

    #[test]
    fn empty_list_places_nothing() {
        assert!(place_tiles(&[], &LayoutSettings::default(), &EngineConfig::default()).is_empty());
    }

    #[test]
    fn display_order_follows_mode() {
        let list = tiles(3);
        assert_eq!(
            display_order(&list, LayoutMode::Masonry),
            vec![TileId(3), TileId(2), TileId(1)]
        );
        assert_eq!(
            display_order(&list, LayoutMode::Uniform),
            vec![TileId(1), TileId(2), TileId(3)]
        );
    }
}
