#![forbid(unsafe_code)]

//! Named aspect ratios for portfolio tiles.
//!
//! [`AspectTag`] names a canonical width:height ratio. The mapping from tag
//! to ratio is total: a missing or unrecognized tag resolves to
//! [`DEFAULT_RATIO`] (4:5 portrait, the common case for portfolio media).
//!
//! # Invariants
//!
//! 1. Every tag maps to exactly one positive, finite ratio.
//! 2. `parse(tag.as_str()) == Some(tag)` for every tag.
//! 3. [`ratio_of_str`] never fails and never returns a non-positive value.

use std::fmt;

/// Ratio used when no tag (or an unknown tag) is supplied.
pub const DEFAULT_RATIO: f64 = 0.8;

/// A canonical width:height ratio label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AspectTag {
    /// 1:1
    Square,
    /// 4:5
    #[default]
    Portrait4x5,
    /// 5:4
    Landscape5x4,
    /// 4:6
    Tall4x6,
    /// 3:4
    Portrait3x4,
    /// 16:9
    Wide16x9,
    /// 4:3
    Standard4x3,
}

impl AspectTag {
    /// All tags, in the order the size picker lists them.
    pub const ALL: [AspectTag; 7] = [
        AspectTag::Square,
        AspectTag::Portrait4x5,
        AspectTag::Landscape5x4,
        AspectTag::Tall4x6,
        AspectTag::Portrait3x4,
        AspectTag::Wide16x9,
        AspectTag::Standard4x3,
    ];

    /// Width divided by height.
    #[must_use]
    pub const fn ratio(self) -> f64 {
        match self {
            AspectTag::Square => 1.0,
            AspectTag::Portrait4x5 => 0.8,
            AspectTag::Landscape5x4 => 1.25,
            AspectTag::Tall4x6 => 0.66,
            AspectTag::Portrait3x4 => 0.75,
            AspectTag::Wide16x9 => 1.777,
            AspectTag::Standard4x3 => 1.333,
        }
    }

    /// Wire form (`"4x5"`), as stored in `aspect_ratio` and `gridAspectRatio`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AspectTag::Square => "1x1",
            AspectTag::Portrait4x5 => "4x5",
            AspectTag::Landscape5x4 => "5x4",
            AspectTag::Tall4x6 => "4x6",
            AspectTag::Portrait3x4 => "3x4",
            AspectTag::Wide16x9 => "16x9",
            AspectTag::Standard4x3 => "4x3",
        }
    }

    /// Human-readable label for size pickers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            AspectTag::Square => "Square (1:1)",
            AspectTag::Portrait4x5 => "Portrait (4:5)",
            AspectTag::Landscape5x4 => "Landscape (5:4)",
            AspectTag::Tall4x6 => "Tall (4:6)",
            AspectTag::Portrait3x4 => "Portrait (3:4)",
            AspectTag::Wide16x9 => "Widescreen (16:9)",
            AspectTag::Standard4x3 => "Standard (4:3)",
        }
    }

    /// Parse a wire tag. Surrounding whitespace is ignored; anything else
    /// unrecognized yields `None`.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }
}

impl fmt::Display for AspectTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ratio for an optional tag; `None` resolves to [`DEFAULT_RATIO`].
#[must_use]
pub fn ratio_of(tag: Option<AspectTag>) -> f64 {
    tag.map_or(DEFAULT_RATIO, AspectTag::ratio)
}

/// Ratio for a raw wire string; unknown or empty input resolves to
/// [`DEFAULT_RATIO`].
#[must_use]
pub fn ratio_of_str(tag: Option<&str>) -> f64 {
    ratio_of(tag.and_then(AspectTag::parse))
}

/// Label for a tag.
#[must_use]
pub fn label_of(tag: AspectTag) -> &'static str {
    tag.label()
}
