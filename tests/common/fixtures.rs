//! Test fixtures and data factories
//!
//! Factory methods for creating test data with sensible defaults. All
//! factories create real objects, not mocks.

use routier_rs::{DestinationRecord, VehicleProfile};

/// Factory for destination records
pub struct RecordFactory;

impl RecordFactory {
    /// Record resolved through geocoding
    pub fn with_address(id: &str, address: &str) -> DestinationRecord {
        DestinationRecord::new(id, format!("Destination {id}")).with_address(address)
    }

    /// Record carrying pre-supplied coordinates (no geocoding)
    pub fn with_coordinates(id: &str, lat: f64, lon: f64) -> DestinationRecord {
        DestinationRecord::new(id, format!("Destination {id}")).with_coordinates(lat, lon)
    }

    /// Record with only a postcode and city
    pub fn with_postcode_city(id: &str, postcode: &str, city: &str) -> DestinationRecord {
        DestinationRecord::new(id, format!("Destination {id}")).with_postcode_city(postcode, city)
    }
}

/// A 19 t rigid truck, lighter than the default articulated profile.
pub fn rigid_profile() -> VehicleProfile {
    VehicleProfile {
        weight: 19.0,
        height: 3.5,
        width: 2.5,
        length: 10.0,
        axle_load: 9.0,
        hazmat: false,
    }
}
