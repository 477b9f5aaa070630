#![forbid(unsafe_code)]

//! Wire formats for the WebSTAR profile, portfolio and analytics APIs.
//!
//! # Key Components
//!
//! - [`customization`] - the `portfolio_customization` settings blob
//! - [`portfolio`] - item lists into layout tiles
//! - [`analytics`] - daily views/clicks, the short-lived cache, media counts
//! - [`rest`] - host requests as REST calls, and a [`PortfolioApi`] adapter
//!
//! [`PortfolioApi`]: webstar_runtime::PortfolioApi

pub mod analytics;
pub mod customization;
pub mod portfolio;
pub mod rest;

pub use analytics::{
    ANALYTICS_CACHE_TTL_MS, AnalyticsCache, AnalyticsError, CacheEntry, DailyAnalytics,
    DailyPoint, MediaCounts,
};
pub use customization::{CustomizationError, CustomizationJson, CustomizationUpdate};
pub use portfolio::{PortfolioItem, tiles_from_items};
pub use rest::{Method, RestApi, RestCall, Transport};
