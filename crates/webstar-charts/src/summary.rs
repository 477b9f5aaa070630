#![forbid(unsafe_code)]

//! Headline numbers shown beside each sparkline.

use crate::projection::Sample;

/// Total over the window and the most recent day's value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeriesSummary {
    pub total: f64,
    /// Value of the last sample ("today"); 0 for an empty series.
    pub latest: f64,
    pub days: usize,
}

impl SeriesSummary {
    #[must_use]
    pub fn of(samples: &[Sample]) -> Self {
        Self {
            total: samples.iter().map(|s| s.value).sum(),
            latest: samples.last().map_or(0.0, |s| s.value),
            days: samples.len(),
        }
    }
}
