//! Run configuration.

use std::path::PathBuf;

/// Locations of the scenario files one analysis run reads.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputPaths {
    /// Event log CSV (`time,kind,vehicle,carrier,tour,link,shipment,capacity_demand`).
    pub events:        PathBuf,
    /// Vehicle-type CSV (`id,capacity,cost_per_second,cost_per_meter,fixed_cost`).
    pub vehicle_types: PathBuf,
    /// Vehicle assignment CSV (`vehicle_id,vehicle_type_id`).
    pub vehicles:      PathBuf,
    /// Link CSV (`link_id,length_m`).
    pub links:         PathBuf,
    /// Carrier JSON array.
    pub carriers:      PathBuf,
}

/// Top-level analysis configuration.
///
/// Typically loaded from a JSON file by `fa_input::load_config` and passed to
/// the application binary.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisConfig {
    pub inputs:     InputPaths,
    /// Directory the reports are written to.  Created if missing.
    pub output_dir: PathBuf,
}
