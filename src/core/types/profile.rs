//! HGV vehicle profile carried as routing restrictions.

use serde::{Deserialize, Serialize};

/// Vehicle restrictions applied verbatim to every routing call in a batch.
///
/// Units: tonnes for `weight` and `axle_load`, metres for the dimensions.
/// Immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    /// Gross vehicle weight in tonnes
    pub weight: f64,
    /// Height in metres
    pub height: f64,
    /// Width in metres
    pub width: f64,
    /// Length in metres
    pub length: f64,
    /// Maximum axle load in tonnes
    pub axle_load: f64,
    /// Whether the vehicle carries hazardous materials
    pub hazmat: bool,
}

impl Default for VehicleProfile {
    /// Standard 44 t articulated HGV.
    fn default() -> Self {
        Self {
            weight: 44.0,
            height: 4.0,
            width: 2.55,
            length: 16.5,
            axle_load: 11.5,
            hazmat: false,
        }
    }
}
