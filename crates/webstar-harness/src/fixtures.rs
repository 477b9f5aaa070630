#![forbid(unsafe_code)]

//! Reference portfolios shared by integration tests and benches.

use webstar_layout::{AspectTag, Tile};

/// `n` tiles with ids `1..=n` and no size choice.
#[must_use]
pub fn plain_portfolio(n: u64) -> Vec<Tile> {
    (1..=n).map(Tile::new).collect()
}

/// `n` tiles cycling through every aspect tag, with every eighth tile left
/// untagged.
#[must_use]
pub fn mixed_portfolio(n: u64) -> Vec<Tile> {
    (1..=n)
        .map(|id| {
            let slot = (id % 8) as usize;
            match AspectTag::ALL.get(slot) {
                Some(tag) => Tile::new(id).with_aspect(*tag),
                None => Tile::new(id),
            }
        })
        .collect()
}

/// Photographer-style portfolio: mostly portrait with a few wide shots.
#[must_use]
pub fn photo_portfolio() -> Vec<Tile> {
    vec![
        Tile::new(101).with_aspect(AspectTag::Portrait4x5),
        Tile::new(102).with_aspect(AspectTag::Portrait4x5),
        Tile::new(103).with_aspect(AspectTag::Wide16x9),
        Tile::new(104).with_aspect(AspectTag::Square),
        Tile::new(105).with_aspect(AspectTag::Tall4x6),
        Tile::new(106),
        Tile::new(107).with_aspect(AspectTag::Landscape5x4),
        Tile::new(108).with_aspect(AspectTag::Portrait3x4),
        Tile::new(109).with_aspect(AspectTag::Standard4x3),
    ]
}

/// Ids of `tiles` in order.
#[must_use]
pub fn ids(tiles: &[Tile]) -> Vec<u64> {
    tiles.iter().map(|t| t.id.0).collect()
}
