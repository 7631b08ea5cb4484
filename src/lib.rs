//! # Routier-RS
//!
//! A batch destination-enrichment engine: resolves free-text addresses into
//! coordinates and computes HGV (truck) distance and duration from a fixed
//! origin for every destination in a list, by orchestrating calls to
//! OpenRouteService under its rate limits.
//!
//! ## Features
//!
//! - **Two-phase pipeline**: geocode-if-needed, then route, per record
//! - **Bounded concurrency**: a hard ceiling on in-flight pipelines plus a
//!   fixed quiescence interval between launches
//! - **Throttle-aware**: HTTP 429 retries the whole record attempt after a
//!   fixed delay, without giving up
//! - **Address cache**: normalized-key geocode cache shared across
//!   pipelines and across batch runs
//! - **Per-record failure isolation**: the worst outcome for one record is
//!   its own terminal error; siblings keep going
//! - **Live progress**: index-addressed status callback on every phase
//!   change
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use routier_rs::{
//!     BatchConfig, BatchScheduler, DestinationRecord, OrsConfig, OrsProvider, VehicleProfile,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = Arc::new(OrsProvider::new(OrsConfig::from_env())?);
//!     let scheduler = BatchScheduler::new(provider, BatchConfig::default());
//!
//!     let records = vec![
//!         DestinationRecord::new("1", "Depot Lyon").with_address("12 Quai du Commerce, Lyon"),
//!         DestinationRecord::new("2", "Client Vienne").with_postcode_city("38200", "Vienne"),
//!     ];
//!
//!     let results = scheduler
//!         .run(records, &VehicleProfile::default(), |index, record| {
//!             println!("#{index}: {:?}", record.status);
//!         })
//!         .await;
//!
//!     for record in &results {
//!         println!("{}: {:?} km", record.label, record.distance_km);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

// Public module exports
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use crate::config::{BatchConfig, FRANCE_COUNTRY_CODES, ORIGIN, OriginPoint};
pub use crate::core::batch::{BatchScheduler, ProgressCallback};
pub use crate::core::cache::{CachedLocation, GeocodeCache};
pub use crate::core::providers::RoutingProvider;
pub use crate::core::providers::ors::{OrsConfig, OrsProvider};
pub use crate::core::types::errors::{ProviderError, Result};
pub use crate::core::types::geo::Coordinate;
pub use crate::core::types::profile::VehicleProfile;
pub use crate::core::types::record::{DestinationRecord, RecordStatus};
pub use crate::core::types::responses::{
    GeocodeFeature, GeocodeProperties, GeocodeResponse, PointGeometry, RouteFeature,
    RouteProperties, RouteResponse, RouteSummary,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
