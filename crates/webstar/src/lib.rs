#![forbid(unsafe_code)]

//! WebSTAR public facade crate.
//!
//! Re-exports the layout engine, the editing session, the analytics charts
//! and the profile wire formats behind one dependency, plus a prelude for
//! the common types.

use std::fmt;

// --- Layout re-exports -----------------------------------------------------

pub use webstar_layout::{
    AspectTag, EngineConfig, GridLayout, LayoutMode, LayoutSettings, PlacedTile, Point, Rect,
    SettingsError, Sides, Tile, TileId, display_order, pack_grid, place_tiles,
};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use webstar_runtime::{
    Cmd, HostError, HostRequest, LayoutSession, Model, Notification, PortfolioApi, SessionMsg,
    SessionView, dispatch,
};

// --- Chart re-exports ------------------------------------------------------

#[cfg(feature = "charts")]
pub use webstar_charts::{Canvas, HoverState, Sample, Tooltip, format_compact};

// --- Web re-exports --------------------------------------------------------

#[cfg(feature = "web")]
pub use webstar_web::{
    AnalyticsCache, AnalyticsError, CustomizationError, DailyAnalytics, MediaCounts,
    PortfolioItem, RestApi, RestCall, Transport,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for WebSTAR hosts.
#[derive(Debug)]
pub enum Error {
    /// Layout settings were rejected.
    Settings(SettingsError),
    /// The host API refused a request.
    #[cfg(feature = "runtime")]
    Host(HostError),
    /// The customization blob could not be read or written.
    #[cfg(feature = "web")]
    Customization(CustomizationError),
    /// An analytics payload could not be read.
    #[cfg(feature = "web")]
    Analytics(AnalyticsError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Settings(err) => write!(f, "{err}"),
            #[cfg(feature = "runtime")]
            Self::Host(err) => write!(f, "{err}"),
            #[cfg(feature = "web")]
            Self::Customization(err) => write!(f, "{err}"),
            #[cfg(feature = "web")]
            Self::Analytics(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Settings(err) => Some(err),
            #[cfg(feature = "runtime")]
            Self::Host(err) => Some(err),
            #[cfg(feature = "web")]
            Self::Customization(err) => Some(err),
            #[cfg(feature = "web")]
            Self::Analytics(err) => Some(err),
        }
    }
}

impl From<SettingsError> for Error {
    fn from(err: SettingsError) -> Self {
        Self::Settings(err)
    }
}

#[cfg(feature = "runtime")]
impl From<HostError> for Error {
    fn from(err: HostError) -> Self {
        Self::Host(err)
    }
}

#[cfg(feature = "web")]
impl From<CustomizationError> for Error {
    fn from(err: CustomizationError) -> Self {
        Self::Customization(err)
    }
}

#[cfg(feature = "web")]
impl From<AnalyticsError> for Error {
    fn from(err: AnalyticsError) -> Self {
        Self::Analytics(err)
    }
}

/// Standard result type for WebSTAR APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AspectTag, EngineConfig, Error, LayoutMode, LayoutSettings, PlacedTile, Result, Tile,
        TileId,
    };

    #[cfg(feature = "runtime")]
    pub use crate::{Cmd, LayoutSession, Model, SessionMsg};

    #[cfg(feature = "charts")]
    pub use crate::{HoverState, Sample};

    #[cfg(feature = "web")]
    pub use crate::{DailyAnalytics, PortfolioItem};

    pub use crate::{core, layout};

    #[cfg(feature = "runtime")]
    pub use crate::runtime;

    #[cfg(feature = "charts")]
    pub use crate::charts;

    #[cfg(feature = "web")]
    pub use crate::web;
}

pub use webstar_core as core;
pub use webstar_layout as layout;

#[cfg(feature = "runtime")]
pub use webstar_runtime as runtime;

#[cfg(feature = "charts")]
pub use webstar_charts as charts;

#[cfg(feature = "web")]
pub use webstar_web as web;
