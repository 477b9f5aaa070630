#![forbid(unsafe_code)]

//! Portfolio items as returned by `/api/portfolio`.

use serde::{Deserialize, Serialize};
use webstar_layout::{AspectTag, Tile, TileId};

/// One portfolio item. Only the fields the grid needs are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: u64,
    pub content_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Size choice tag such as `"4x5"`; unknown tags read as unset.
    #[serde(default)]
    pub aspect_ratio: Option<String>,
    #[serde(default)]
    pub order: u32,
}

impl PortfolioItem {
    #[must_use]
    pub fn tile_id(&self) -> TileId {
        TileId(self.id)
    }

    /// The item as a layout tile.
    #[must_use]
    pub fn to_tile(&self) -> Tile {
        let tile = Tile::new(self.id).with_order(self.order);
        match self.aspect_ratio.as_deref().and_then(AspectTag::parse) {
            Some(tag) => tile.with_aspect(tag),
            None => tile,
        }
    }
}

/// Parse an item list.
pub fn items_from_json(s: &str) -> Result<Vec<PortfolioItem>, serde_json::Error> {
    serde_json::from_str(s)
}

/// Tiles in storage order: ascending `order`, ties kept in response order.
#[must_use]
pub fn tiles_from_items(items: &[PortfolioItem]) -> Vec<Tile> {
    let mut sorted: Vec<&PortfolioItem> = items.iter().collect();
    sorted.sort_by_key(|item| item.order);
    sorted.into_iter().map(PortfolioItem::to_tile).collect()
}
