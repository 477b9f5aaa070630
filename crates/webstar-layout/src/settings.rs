#![forbid(unsafe_code)]

//! User-facing layout settings (column count, spacing, mode, theme).

use std::fmt;

use crate::aspect::AspectTag;

/// Largest corner radius offered by the customization controls.
pub const MAX_RADIUS_PX: f64 = 24.0;

/// How tiles are sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutMode {
    /// All tiles share one aspect ratio; one grid row per tile.
    Uniform,
    /// Each tile keeps its own ratio and spans multiple fixed-height rows.
    #[default]
    Masonry,
}

impl LayoutMode {
    /// Wire form used in the customization blob.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Uniform => "uniform",
            LayoutMode::Masonry => "masonry",
        }
    }

    /// Parse the wire form.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "uniform" => Some(LayoutMode::Uniform),
            "masonry" => Some(LayoutMode::Masonry),
            _ => None,
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings violation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsError {
    ZeroColumns,
    NegativeGap { gap_px: f64 },
    RadiusOutOfRange { radius_px: f64 },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroColumns => write!(f, "grid needs at least one column"),
            Self::NegativeGap { gap_px } => {
                write!(f, "gap must be a non-negative number of pixels, got {gap_px}")
            }
            Self::RadiusOutOfRange { radius_px } => {
                write!(f, "corner radius must be within 0..={MAX_RADIUS_PX}, got {radius_px}")
            }
        }
    }
}

impl std::error::Error for SettingsError {}

/// Layout settings chosen by the profile owner.
///
/// The customization controls offer 2, 3 or 4 columns and gaps of 0–16px,
/// but the engine accepts any `columns >= 1` and any finite `gap_px >= 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSettings {
    pub columns: u16,
    pub gap_px: f64,
    pub radius_px: f64,
    pub mode: LayoutMode,
    /// Shared ratio, only consulted in [`LayoutMode::Uniform`].
    pub global_aspect: AspectTag,
    /// Theme name, carried opaquely for the host.
    pub theme: String,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            columns: 3,
            gap_px: 4.0,
            radius_px: 0.0,
            mode: LayoutMode::Masonry,
            global_aspect: AspectTag::Portrait4x5,
            theme: "default".to_string(),
        }
    }
}

impl LayoutSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn columns(mut self, columns: u16) -> Self {
        self.columns = columns;
        self
    }

    #[must_use]
    pub fn gap(mut self, gap_px: f64) -> Self {
        self.gap_px = gap_px;
        self
    }

    #[must_use]
    pub fn radius(mut self, radius_px: f64) -> Self {
        self.radius_px = radius_px;
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: LayoutMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn global_aspect(mut self, tag: AspectTag) -> Self {
        self.global_aspect = tag;
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Check the settings invariants.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.columns == 0 {
            return Err(SettingsError::ZeroColumns);
        }
        if !(self.gap_px >= 0.0 && self.gap_px.is_finite()) {
            return Err(SettingsError::NegativeGap {
                gap_px: self.gap_px,
            });
        }
        if !(0.0..=MAX_RADIUS_PX).contains(&self.radius_px) {
            return Err(SettingsError::RadiusOutOfRange {
                radius_px: self.radius_px,
            });
        }
        Ok(())
    }
}
