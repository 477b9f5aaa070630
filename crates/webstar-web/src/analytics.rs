#![forbid(unsafe_code)]

//! Analytics payloads: daily views/clicks and portfolio media counts.

use std::fmt;

use serde::{Deserialize, Serialize};
use webstar_charts::{Sample, SeriesSummary, Tooltip};

use crate::portfolio::PortfolioItem;

/// How long a fetched daily payload may be reused.
pub const ANALYTICS_CACHE_TTL_MS: u64 = 2 * 60 * 1_000;

/// Failure to read an analytics payload.
#[derive(Debug)]
pub enum AnalyticsError {
    Json(serde_json::Error),
    /// A count was negative or not finite.
    NegativeValue { date: String, field: &'static str, value: f64 },
}

impl fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "analytics payload is not valid JSON: {err}"),
            Self::NegativeValue { date, field, value } => {
                write!(f, "analytics {field} for {date} must be a non-negative count, got {value}")
            }
        }
    }
}

impl std::error::Error for AnalyticsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::NegativeValue { .. } => None,
        }
    }
}

impl From<serde_json::Error> for AnalyticsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// One day of profile analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: String,
    pub profile_views: f64,
    pub link_clicks: f64,
}

/// The daily analytics window, oldest day first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyAnalytics {
    pub days: Vec<DailyPoint>,
}

impl DailyAnalytics {
    /// Parse and validate the `/api/analytics/daily` payload.
    pub fn from_json(s: &str) -> Result<Self, AnalyticsError> {
        let analytics: Self = serde_json::from_str(s)?;
        analytics.validate()?;
        Ok(analytics)
    }

    pub fn to_json(&self) -> Result<String, AnalyticsError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), AnalyticsError> {
        for day in &self.days {
            for (field, value) in [("profile_views", day.profile_views), ("link_clicks", day.link_clicks)] {
                if !(value >= 0.0 && value.is_finite()) {
                    return Err(AnalyticsError::NegativeValue {
                        date: day.date.clone(),
                        field,
                        value,
                    });
                }
            }
        }
        Ok(())
    }

    /// Profile views as a chart series.
    #[must_use]
    pub fn views(&self) -> Vec<Sample> {
        self.days
            .iter()
            .map(|d| Sample::new(d.date.clone(), d.profile_views))
            .collect()
    }

    /// Link clicks as a chart series.
    #[must_use]
    pub fn clicks(&self) -> Vec<Sample> {
        self.days
            .iter()
            .map(|d| Sample::new(d.date.clone(), d.link_clicks))
            .collect()
    }

    #[must_use]
    pub fn views_summary(&self) -> SeriesSummary {
        SeriesSummary::of(&self.views())
    }

    #[must_use]
    pub fn clicks_summary(&self) -> SeriesSummary {
        SeriesSummary::of(&self.clicks())
    }

    /// Tooltip for the day at `index`.
    #[must_use]
    pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
        let day = self.days.get(index)?;
        Some(Tooltip {
            index,
            date: day.date.clone(),
            views: day.profile_views,
            clicks: day.link_clicks,
        })
    }
}

/// Stored form of a cached payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub data: DailyAnalytics,
    /// Fetch time, ms since the epoch.
    pub timestamp: u64,
}

/// Reuses the last daily payload for a short window.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsCache {
    ttl_ms: u64,
    entry: Option<CacheEntry>,
}

impl Default for AnalyticsCache {
    fn default() -> Self {
        Self::new(ANALYTICS_CACHE_TTL_MS)
    }
}

impl AnalyticsCache {
    #[must_use]
    pub const fn new(ttl_ms: u64) -> Self {
        Self { ttl_ms, entry: None }
    }

    /// Restore from a previously stored entry.
    #[must_use]
    pub fn with_entry(mut self, entry: CacheEntry) -> Self {
        self.entry = Some(entry);
        self
    }

    pub fn store(&mut self, data: DailyAnalytics, now_ms: u64) {
        self.entry = Some(CacheEntry {
            data,
            timestamp: now_ms,
        });
    }

    /// The cached payload if it is younger than the TTL.
    #[must_use]
    pub fn get(&self, now_ms: u64) -> Option<&DailyAnalytics> {
        let entry = self.entry.as_ref()?;
        let age = now_ms.saturating_sub(entry.timestamp);
        if age < self.ttl_ms {
            Some(&entry.data)
        } else {
            tracing::trace!(age_ms = age, ttl_ms = self.ttl_ms, "analytics cache stale");
            None
        }
    }

    /// Entry for persisting across page loads.
    #[must_use]
    pub fn entry(&self) -> Option<&CacheEntry> {
        self.entry.as_ref()
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

/// Portfolio item counts by content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediaCounts {
    pub photo: usize,
    pub video: usize,
    pub audio: usize,
    pub pdf: usize,
    pub text: usize,
    pub link: usize,
}

impl MediaCounts {
    /// Count items by `content_type`. Unrecognized types are not counted.
    pub fn from_content_types<'a>(types: impl IntoIterator<Item = &'a str>) -> Self {
        let mut counts = Self::default();
        for content_type in types {
            match content_type {
                "photo" => counts.photo += 1,
                "video" => counts.video += 1,
                "audio" => counts.audio += 1,
                "pdf" => counts.pdf += 1,
                "text" => counts.text += 1,
                "link" => counts.link += 1,
                _ => {}
            }
        }
        counts
    }

    #[must_use]
    pub fn from_items(items: &[PortfolioItem]) -> Self {
        Self::from_content_types(items.iter().map(|item| item.content_type.as_str()))
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.photo + self.video + self.audio + self.pdf + self.text + self.link
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PAYLOAD: &str = r#"[
        {"date":"2024-03-01","profile_views":120,"link_clicks":14},
        {"date":"2024-03-02","profile_views":80,"link_clicks":30}
    ]"#;

    #[test]
    fn parses_daily_payload() {
        let analytics = DailyAnalytics::from_json(PAYLOAD).unwrap();
        assert_eq!(analytics.days.len(), 2);
        assert_eq!(
            analytics.views(),
            vec![Sample::new("2024-03-01", 120.0), Sample::new("2024-03-02", 80.0)]
        );
        assert_eq!(analytics.clicks()[1].value, 30.0);
        assert_eq!(analytics.views_summary().total, 200.0);
        assert_eq!(analytics.clicks_summary().latest, 30.0);
    }

    #[test]
    fn tooltip_reads_both_series() {
        let analytics = DailyAnalytics::from_json(PAYLOAD).unwrap();
        let tip = analytics.tooltip(0).unwrap();
        assert_eq!(tip.date, "2024-03-01");
        assert_eq!((tip.views, tip.clicks), (120.0, 14.0));
        assert_eq!(
            Some(tip),
            Tooltip::at(0, &analytics.views(), &analytics.clicks())
        );
        assert_eq!(analytics.tooltip(5), None);
    }

    #[test]
    fn negative_counts_are_rejected() {
        let err = DailyAnalytics::from_json(r#"[{"date":"d","profile_views":-1,"link_clicks":0}]"#)
            .unwrap_err();
        assert!(matches!(err, AnalyticsError::NegativeValue { field: "profile_views", .. }));
        assert!(err.to_string().contains("profile_views"));
        assert!(matches!(
            DailyAnalytics::from_json(r#"{"date":"d"}"#),
            Err(AnalyticsError::Json(_))
        ));
    }

    #[test]
    fn cache_expires_after_ttl() {
        let mut cache = AnalyticsCache::default();
        assert!(cache.get(0).is_none());
        cache.store(DailyAnalytics::default(), 1_000);
        assert!(cache.get(1_000 + ANALYTICS_CACHE_TTL_MS - 1).is_some());
        assert!(cache.get(1_000 + ANALYTICS_CACHE_TTL_MS).is_none());
        cache.invalidate();
        assert!(cache.entry().is_none());
    }

    #[test]
    fn cache_entry_round_trips() {
        let data = DailyAnalytics::from_json(PAYLOAD).unwrap();
        let entry = CacheEntry { data, timestamp: 42 };
        let stored = serde_json::to_string(&entry).unwrap();
        let restored: CacheEntry = serde_json::from_str(&stored).unwrap();
        let cache = AnalyticsCache::default().with_entry(restored);
        assert_eq!(cache.get(100).map(|d| d.days.len()), Some(2));
    }

    #[test]
    fn media_counts_by_type() {
        let counts =
            MediaCounts::from_content_types(["photo", "video", "photo", "link", "gif", "pdf"]);
        assert_eq!(
            counts,
            MediaCounts {
                photo: 2,
                video: 1,
                audio: 0,
                pdf: 1,
                text: 0,
                link: 1,
            }
        );
        assert_eq!(counts.total(), 5);
    }
}
