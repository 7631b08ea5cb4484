//! Shared data types
//!
//! Records and their lifecycle, vehicle profiles, geographic primitives,
//! provider response contracts, and the error taxonomy.

pub mod errors;
pub mod geo;
pub mod profile;
pub mod record;
pub mod responses;
