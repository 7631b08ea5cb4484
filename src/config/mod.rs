//! Batch scheduling configuration and fixed geographic constants.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::types::geo::Coordinate;

/// Country codes accepted from geocode matches. Pelias reports both the
/// alpha-3 and alpha-2 forms depending on the data source.
pub const FRANCE_COUNTRY_CODES: [&str; 2] = ["FRA", "FR"];

/// Fixed start point of every route computation, also used as the focus
/// bias for geocode searches.
pub const ORIGIN: OriginPoint = OriginPoint {
    label: "Loire-sur-Rhône 69700, France",
    lat: 45.561075,
    lon: 4.804825,
};

/// A named geographic point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OriginPoint {
    /// Human-readable place name
    pub label: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl OriginPoint {
    /// The bare coordinate pair.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

/// Scheduling knobs for a batch run.
///
/// The defaults reproduce the pacing that proved stable against the
/// provider's throttling; raise `max_concurrency` at your own risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Hard ceiling on simultaneously active record pipelines.
    pub max_concurrency: usize,
    /// Quiescence interval after each pipeline completes before the next
    /// launch is considered, applied even when capacity is free.
    pub launch_interval: Duration,
    /// Fixed pause before re-attempting a record that hit the provider's
    /// quota. There is no attempt cap and no backoff.
    pub quota_retry_delay: Duration,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_concurrency: 2,
            launch_interval: Duration::from_millis(500),
            quota_retry_delay: Duration::from_secs(5),
        }
    }
}
