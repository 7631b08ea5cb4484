//! Provider response contracts.
//!
//! GeoJSON-shaped feature collections as returned by the geocoding and
//! routing endpoints. Only the consumed fields are modelled; everything
//! else in the payload is ignored. An empty feature collection is a valid
//! outcome, not a transport error.

use serde::{Deserialize, Serialize};

/// Geocode search response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub features: Vec<GeocodeFeature>,
}

impl GeocodeResponse {
    /// First (best) match, if any.
    pub fn best_match(&self) -> Option<&GeocodeFeature> {
        self.features.first()
    }
}

/// One geocode match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeFeature {
    pub geometry: PointGeometry,
    #[serde(default)]
    pub properties: GeocodeProperties,
}

/// GeoJSON point geometry, `[lon, lat]` axis order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointGeometry {
    pub coordinates: [f64; 2],
}

impl PointGeometry {
    pub fn lon(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn lat(&self) -> f64 {
        self.coordinates[1]
    }
}

/// Consumed subset of a geocode feature's properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeocodeProperties {
    /// Country code of the match, alpha-3 or alpha-2
    #[serde(default)]
    pub country_a: Option<String>,
    /// Full display label
    #[serde(default)]
    pub label: Option<String>,
    /// Short place name, fallback when no label is present
    #[serde(default)]
    pub name: Option<String>,
}

impl GeocodeProperties {
    /// Display label, falling back to the short name.
    pub fn display_label(&self) -> Option<String> {
        self.label.clone().or_else(|| self.name.clone())
    }
}

/// Routing response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteResponse {
    #[serde(default)]
    pub features: Vec<RouteFeature>,
}

impl RouteResponse {
    /// Summary of the best route, when the provider produced one.
    pub fn summary(&self) -> Option<&RouteSummary> {
        self.features.first().and_then(|f| f.properties.summary.as_ref())
    }
}

/// One route alternative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteFeature {
    #[serde(default)]
    pub properties: RouteProperties,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteProperties {
    #[serde(default)]
    pub summary: Option<RouteSummary>,
}

/// Distance and duration of a computed route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Metres
    pub distance: f64,
    /// Seconds
    pub duration: f64,
}
