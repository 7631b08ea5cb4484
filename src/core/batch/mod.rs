//! Batch scheduler: bounded-concurrency launch loop with paced starts.

mod pipeline;


use std::sync::Arc;

use futures::StreamExt;
use futures::stream::FuturesUnordered;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::config::BatchConfig;
use crate::core::cache::GeocodeCache;
use crate::core::providers::RoutingProvider;
use crate::core::types::profile::VehicleProfile;
use crate::core::types::record::{DestinationRecord, RecordStatus};

/// Progress callback: index into the original ordering plus the record's
/// current state.
pub type ProgressCallback = dyn Fn(usize, &DestinationRecord) + Send + Sync;

/// Drives many independent record pipelines under a concurrency ceiling.
///
/// Launch order is monotonic in input index; completions may interleave.
/// After each pipeline finishes, the scheduler waits the configured
/// quiescence interval before considering the next launch, even when
/// capacity is free. The geocode cache lives on the scheduler, so
/// consecutive [`run`](BatchScheduler::run) calls share resolved
/// addresses.
pub struct BatchScheduler {
    provider: Arc<dyn RoutingProvider>,
    cache: Arc<GeocodeCache>,
    config: BatchConfig,
}

impl BatchScheduler {
    pub fn new(provider: Arc<dyn RoutingProvider>, config: BatchConfig) -> Self {
        Self::with_cache(provider, config, Arc::new(GeocodeCache::new()))
    }

    /// Use an existing cache, shared with other schedulers.
    pub fn with_cache(
        provider: Arc<dyn RoutingProvider>,
        config: BatchConfig,
        cache: Arc<GeocodeCache>,
    ) -> Self {
        Self {
            provider,
            cache,
            config,
        }
    }

    /// The shared geocode cache.
    pub fn cache(&self) -> &Arc<GeocodeCache> {
        &self.cache
    }

    /// Process every record to a terminal status.
    ///
    /// Returns the records in their input order, same length as the input.
    /// `on_update` fires on each phase entry and on the terminal
    /// transition, addressed by input index; a given index's updates are
    /// strictly ordered, cross-index ordering is not guaranteed.
    pub async fn run<F>(
        &self,
        records: Vec<DestinationRecord>,
        profile: &VehicleProfile,
        on_update: F,
    ) -> Vec<DestinationRecord>
    where
        F: Fn(usize, &DestinationRecord) + Send + Sync + 'static,
    {
        let total = records.len();
        let ceiling = self.config.max_concurrency.max(1);
        let on_update: Arc<ProgressCallback> = Arc::new(on_update);

        let mut results = records;
        let mut in_flight: FuturesUnordered<JoinHandle<(usize, DestinationRecord)>> =
            FuturesUnordered::new();
        let mut next_index = 0;

        info!(total, max_concurrency = ceiling, "batch started");

        while next_index < total && in_flight.len() < ceiling {
            in_flight.push(self.launch(next_index, results[next_index].clone(), profile, &on_update));
            next_index += 1;
        }

        while let Some(joined) = in_flight.next().await {
            match joined {
                Ok((index, record)) => {
                    debug!(index, status = ?record.status, "pipeline finished");
                    results[index] = record;
                    (*on_update)(index, &results[index]);
                }
                Err(err) => error!(%err, "pipeline task aborted"),
            }

            // Quiescence before the next launch, even with capacity free.
            tokio::time::sleep(self.config.launch_interval).await;

            while next_index < total && in_flight.len() < ceiling {
                in_flight.push(self.launch(
                    next_index,
                    results[next_index].clone(),
                    profile,
                    &on_update,
                ));
                next_index += 1;
            }
        }

        info!(total, cached_addresses = self.cache.len(), "batch complete");
        results
    }

    /// Spawn one record pipeline. Fatal provider errors surface here and
    /// mark this record only; sibling pipelines keep running.
    fn launch(
        &self,
        index: usize,
        record: DestinationRecord,
        profile: &VehicleProfile,
        on_update: &Arc<ProgressCallback>,
    ) -> JoinHandle<(usize, DestinationRecord)> {
        let provider = Arc::clone(&self.provider);
        let cache = Arc::clone(&self.cache);
        let config = self.config.clone();
        let profile = profile.clone();
        let on_update = Arc::clone(on_update);

        tokio::spawn(async move {
            let progress = move |record: &DestinationRecord| (*on_update)(index, record);

            let mut record = record;
            match pipeline::process_record(
                &mut record,
                &profile,
                provider.as_ref(),
                &cache,
                &config,
                &progress,
            )
            .await
            {
                Ok(()) => {}
                Err(fatal) => {
                    error!(index, %fatal, "fatal provider error");
                    record.status = RecordStatus::Error;
                    record.error_message = Some(fatal.record_message());
                }
            }
            (index, record)
        })
    }
}
