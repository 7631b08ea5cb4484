//! Routing provider gateway.
//!
//! The scheduler talks to the outside world through the
//! [`RoutingProvider`] trait; `ors` contains the OpenRouteService
//! implementation.

pub mod ors;

use async_trait::async_trait;

use crate::core::types::errors::Result;
use crate::core::types::geo::Coordinate;
use crate::core::types::profile::VehicleProfile;
use crate::core::types::responses::{GeocodeResponse, RouteResponse};

/// Outbound operations the batch pipeline needs from a provider.
///
/// Implementations classify every transport/HTTP failure into the closed
/// [`ProviderError`](crate::core::types::errors::ProviderError) taxonomy;
/// an empty feature collection is a valid response, not an error.
#[async_trait]
pub trait RoutingProvider: Send + Sync {
    /// Resolve free text into candidate locations, biased toward `focus`
    /// and restricted to the configured country, best match only.
    async fn geocode(&self, text: &str, focus: Coordinate) -> Result<GeocodeResponse>;

    /// Compute a truck route between two points under the profile's
    /// restrictions.
    async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        profile: &VehicleProfile,
    ) -> Result<RouteResponse>;
}
