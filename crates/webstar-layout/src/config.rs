#![forbid(unsafe_code)]

//! Engine constants that stay fixed across a single layout computation.

use std::fmt;

/// Height of one masonry row track, in pixels.
pub const DEFAULT_ROW_UNIT_PX: f64 = 10.0;
/// Reference container width used to estimate column width.
pub const DEFAULT_REFERENCE_WIDTH_PX: f64 = 400.0;
/// Every n-th displayed masonry tile is featured.
pub const DEFAULT_FEATURED_PERIOD: usize = 5;
/// Ratio forced onto featured tiles (twice as tall as wide).
pub const DEFAULT_FEATURED_RATIO: f64 = 0.5;

/// Where the column width used for row-span math comes from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ColumnWidth {
    /// `reference_width_px / columns`. Drifts from the rendered size on very
    /// wide or very narrow viewports.
    #[default]
    Reference,
    /// Measured container width in pixels; gaps between columns are
    /// subtracted before dividing.
    Measured(f64),
}

/// Invalid engine configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineConfigError {
    NonPositiveRowUnit { row_unit_px: f64 },
    NonPositiveReferenceWidth { reference_width_px: f64 },
    NonPositiveMeasuredWidth { width_px: f64 },
    ZeroFeaturedPeriod,
    NonPositiveFeaturedRatio { ratio: f64 },
}

impl fmt::Display for EngineConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveRowUnit { row_unit_px } => {
                write!(f, "row unit must be positive, got {row_unit_px}")
            }
            Self::NonPositiveReferenceWidth { reference_width_px } => {
                write!(f, "reference width must be positive, got {reference_width_px}")
            }
            Self::NonPositiveMeasuredWidth { width_px } => {
                write!(f, "measured container width must be positive, got {width_px}")
            }
            Self::ZeroFeaturedPeriod => write!(f, "featured period must be at least 1"),
            Self::NonPositiveFeaturedRatio { ratio } => {
                write!(f, "featured ratio must be positive, got {ratio}")
            }
        }
    }
}

impl std::error::Error for EngineConfigError {}

/// Fixed parameters of the placement engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub row_unit_px: f64,
    pub reference_width_px: f64,
    pub column_width: ColumnWidth,
    pub featured_period: usize,
    pub featured_ratio: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            row_unit_px: DEFAULT_ROW_UNIT_PX,
            reference_width_px: DEFAULT_REFERENCE_WIDTH_PX,
            column_width: ColumnWidth::Reference,
            featured_period: DEFAULT_FEATURED_PERIOD,
            featured_ratio: DEFAULT_FEATURED_RATIO,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn row_unit(mut self, px: f64) -> Self {
        self.row_unit_px = px;
        self
    }

    #[must_use]
    pub fn reference_width(mut self, px: f64) -> Self {
        self.reference_width_px = px;
        self
    }

    /// Use a measured container width instead of the reference estimate.
    #[must_use]
    pub fn measured_width(mut self, px: f64) -> Self {
        self.column_width = ColumnWidth::Measured(px);
        self
    }

    #[must_use]
    pub fn featured_period(mut self, period: usize) -> Self {
        self.featured_period = period;
        self
    }

    #[must_use]
    pub fn featured_ratio(mut self, ratio: f64) -> Self {
        self.featured_ratio = ratio;
        self
    }

    /// Check that every constant keeps the row-span formula defined.
    pub fn validate(&self) -> Result<(), EngineConfigError> {
        if !(self.row_unit_px > 0.0 && self.row_unit_px.is_finite()) {
            return Err(EngineConfigError::NonPositiveRowUnit {
                row_unit_px: self.row_unit_px,
            });
        }
        if !(self.reference_width_px > 0.0 && self.reference_width_px.is_finite()) {
            return Err(EngineConfigError::NonPositiveReferenceWidth {
                reference_width_px: self.reference_width_px,
            });
        }
        if let ColumnWidth::Measured(width_px) = self.column_width
            && !(width_px > 0.0 && width_px.is_finite())
        {
            return Err(EngineConfigError::NonPositiveMeasuredWidth { width_px });
        }
        if self.featured_period == 0 {
            return Err(EngineConfigError::ZeroFeaturedPeriod);
        }
        if !(self.featured_ratio > 0.0 && self.featured_ratio.is_finite()) {
            return Err(EngineConfigError::NonPositiveFeaturedRatio {
                ratio: self.featured_ratio,
            });
        }
        Ok(())
    }

    /// Estimated pixel width of one column.
    #[must_use]
    pub fn column_width_px(&self, columns: u16, gap_px: f64) -> f64 {
        let columns = f64::from(columns.max(1));
        match self.column_width {
            ColumnWidth::Reference => self.reference_width_px / columns,
            ColumnWidth::Measured(width) => {
                let gaps = gap_px.max(0.0) * (columns - 1.0);
                ((width - gaps) / columns).max(0.0)
            }
        }
    }
}
