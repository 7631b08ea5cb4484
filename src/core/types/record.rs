//! Destination records and their processing lifecycle.

use serde::{Deserialize, Serialize};

use super::geo::Coordinate;

/// Processing status of a destination record.
///
/// `Pending → Geocoding → Routing` followed by one of the three terminal
/// states; records carrying usable coordinates skip `Geocoding` entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    /// Not yet picked up by the scheduler
    #[default]
    Pending,
    /// Resolving the address into coordinates
    Geocoding,
    /// Computing the route from the origin
    Routing,
    /// Route metrics computed
    Success,
    /// Failed with a per-record error; siblings are unaffected
    Error,
    /// Address not found, or resolved outside the accepted territory
    InvalidLocation,
}

impl RecordStatus {
    /// Whether the record will not be mutated further within this run.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Error | Self::InvalidLocation)
    }
}

/// One destination to be enriched with coordinates and route metrics.
///
/// Input fields come from the caller; derived fields are populated by the
/// pipeline. A record is never dropped from a batch: a fully failed one
/// stays in the result list with a terminal status and message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationRecord {
    /// Caller-supplied identifier, free form
    pub id: String,
    /// Display name for the destination
    pub label: String,
    /// Street address, free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Pre-supplied latitude; a record with usable coordinates is routed
    /// without geocoding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    /// Current position in the processing lifecycle
    #[serde(default)]
    pub status: RecordStatus,
    /// Resolved display label, set only when geocoding was performed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geocoded_address: Option<String>,
    /// Route distance in kilometres, set only on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Route duration in minutes, set only on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_min: Option<f64>,
    /// Human-readable failure description on non-success terminal states
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl DestinationRecord {
    /// Create a pending record with no address data.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            address: None,
            postcode: None,
            city: None,
            lat: None,
            lon: None,
            status: RecordStatus::Pending,
            geocoded_address: None,
            distance_km: None,
            duration_min: None,
            error_message: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_postcode_city(mut self, postcode: impl Into<String>, city: impl Into<String>) -> Self {
        self.postcode = Some(postcode.into());
        self.city = Some(city.into());
        self
    }

    pub fn with_coordinates(mut self, lat: f64, lon: f64) -> Self {
        self.lat = Some(lat);
        self.lon = Some(lon);
        self
    }

    /// Pre-supplied coordinates, when both components are present and
    /// finite.
    pub fn coordinates(&self) -> Option<Coordinate> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => {
                let coordinate = Coordinate::new(lat, lon);
                coordinate.is_finite().then_some(coordinate)
            }
            _ => None,
        }
    }

    /// Whether usable coordinates are already present.
    pub fn has_valid_coordinates(&self) -> bool {
        self.coordinates().is_some()
    }

    /// Display address used for geocoding: the explicit street address when
    /// non-blank, otherwise `"{postcode} {city}"`. Empty when the record
    /// carries no address text at all.
    pub fn display_address(&self) -> String {
        if let Some(address) = self.address.as_deref() {
            if !address.trim().is_empty() {
                return address.trim().to_string();
            }
        }
        format!(
            "{} {}",
            self.postcode.as_deref().unwrap_or(""),
            self.city.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }
}
