//! Per-record pipeline: geocode if needed, then route.

use tracing::{debug, warn};

use crate::config::{BatchConfig, FRANCE_COUNTRY_CODES, ORIGIN};
use crate::core::cache::{CachedLocation, GeocodeCache};
use crate::core::providers::RoutingProvider;
use crate::core::types::errors::ProviderError;
use crate::core::types::geo::Coordinate;
use crate::core::types::profile::VehicleProfile;
use crate::core::types::record::{DestinationRecord, RecordStatus};

/// Longest error text written onto a record.
const MAX_ERROR_MESSAGE_CHARS: usize = 40;

/// Status callback scoped to one record; the scheduler binds the index.
pub(crate) type StatusFn<'a> = &'a (dyn Fn(&DestinationRecord) + Send + Sync);

/// Drive one record to a terminal status.
///
/// Quota errors restart the whole attempt from the top (cache re-checked)
/// after the configured delay, without an attempt cap. Fatal credential
/// errors propagate to the scheduler; every other failure terminates the
/// record locally.
pub(crate) async fn process_record(
    record: &mut DestinationRecord,
    profile: &VehicleProfile,
    provider: &dyn RoutingProvider,
    cache: &GeocodeCache,
    config: &BatchConfig,
    on_update: StatusFn<'_>,
) -> Result<(), ProviderError> {
    loop {
        match attempt(record, profile, provider, cache, on_update).await {
            Ok(()) => return Ok(()),
            Err(err) if err.is_retryable() => {
                warn!(
                    id = %record.id,
                    delay_ms = config.quota_retry_delay.as_millis() as u64,
                    "provider throttled, retrying record"
                );
                tokio::time::sleep(config.quota_retry_delay).await;
            }
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => {
                record.status = RecordStatus::Error;
                record.error_message = Some(truncate_message(&err.to_string()));
                return Ok(());
            }
        }
    }
}

/// One full attempt: geocode decision, then route. Returns `Ok` when the
/// record reached a terminal status, `Err` when a provider failure needs
/// classification by the retry loop.
async fn attempt(
    record: &mut DestinationRecord,
    profile: &VehicleProfile,
    provider: &dyn RoutingProvider,
    cache: &GeocodeCache,
    on_update: StatusFn<'_>,
) -> Result<(), ProviderError> {
    // Phase 1: geocode, unless usable coordinates were pre-supplied.
    let destination = match record.coordinates() {
        Some(coordinate) => coordinate,
        None => {
            let display_address = record.display_address();
            if display_address.is_empty() {
                fail(record, RecordStatus::Error, "empty destination");
                return Ok(());
            }

            set_status(record, RecordStatus::Geocoding, on_update);

            match cache.get(&display_address) {
                Some(cached) => {
                    debug!(id = %record.id, "geocode cache hit");
                    record.geocoded_address = cached.resolved_address.clone();
                    Coordinate::new(cached.lat, cached.lon)
                }
                None => {
                    let response = provider
                        .geocode(&display_address, ORIGIN.coordinate())
                        .await?;

                    let feature = match response.best_match() {
                        Some(feature) => feature,
                        None => {
                            fail(record, RecordStatus::InvalidLocation, "not found");
                            return Ok(());
                        }
                    };

                    let country = feature.properties.country_a.as_deref().unwrap_or("");
                    if !FRANCE_COUNTRY_CODES.contains(&country) {
                        fail(record, RecordStatus::InvalidLocation, "outside France");
                        return Ok(());
                    }

                    let resolved =
                        Coordinate::new(feature.geometry.lat(), feature.geometry.lon());
                    record.geocoded_address = feature.properties.display_label();
                    cache.insert(
                        &display_address,
                        CachedLocation {
                            lat: resolved.lat,
                            lon: resolved.lon,
                            resolved_address: record.geocoded_address.clone(),
                        },
                    );
                    resolved
                }
            }
        }
    };

    // Phase 2: route from the fixed origin.
    if !destination.is_finite() {
        // Unreachable given phase 1's contract, but a malformed feature
        // could carry non-finite coordinates.
        fail(record, RecordStatus::Error, "missing coordinates");
        return Ok(());
    }

    set_status(record, RecordStatus::Routing, on_update);

    let response = provider
        .route(ORIGIN.coordinate(), destination, profile)
        .await?;

    let summary = match response.summary() {
        Some(summary) => *summary,
        None => {
            fail(record, RecordStatus::Error, "route impossible");
            return Ok(());
        }
    };

    record.status = RecordStatus::Success;
    record.error_message = None;
    record.distance_km = Some(round_to(summary.distance / 1000.0, 3));
    record.duration_min = Some(round_to(summary.duration / 60.0, 1));
    record.lat = Some(destination.lat);
    record.lon = Some(destination.lon);
    Ok(())
}

fn set_status(record: &mut DestinationRecord, status: RecordStatus, on_update: StatusFn<'_>) {
    record.status = status;
    on_update(record);
}

fn fail(record: &mut DestinationRecord, status: RecordStatus, message: &str) {
    record.status = status;
    record.error_message = Some(truncate_message(message));
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

fn truncate_message(message: &str) -> String {
    message.chars().take(MAX_ERROR_MESSAGE_CHARS).collect()
}
