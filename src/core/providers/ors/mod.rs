//! OpenRouteService provider implementation.
//!
//! Pelias geocoding (`/geocode/search`) plus HGV directions
//! (`/v2/directions/driving-hgv/geojson`).

pub mod client;
pub mod config;
pub(crate) mod error;

pub use client::OrsProvider;
pub use config::OrsConfig;
