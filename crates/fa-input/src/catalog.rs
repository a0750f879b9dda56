//! Vehicle-type and vehicle-assignment loaders.
//!
//! # CSV formats
//!
//! Vehicle types:
//!
//! ```csv
//! id,capacity,cost_per_second,cost_per_meter,fixed_cost
//! light,10,0.01,0.002,50
//! ```
//!
//! Vehicle assignments (every type must appear in the type file):
//!
//! ```csv
//! vehicle_id,vehicle_type_id
//! veh_1,light
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use fa_core::{CostInformation, VehicleCatalog, VehicleType};

use crate::InputResult;

#[derive(Deserialize)]
struct VehicleTypeRecord {
    id:              String,
    capacity:        f64,
    cost_per_second: f64,
    cost_per_meter:  f64,
    fixed_cost:      f64,
}

#[derive(Deserialize)]
struct VehicleRecord {
    vehicle_id:      String,
    vehicle_type_id: String,
}

/// Build a [`VehicleCatalog`] from a type file and an assignment file.
pub fn load_vehicle_catalog(types: &Path, vehicles: &Path) -> InputResult<VehicleCatalog> {
    load_vehicle_catalog_reader(std::fs::File::open(types)?, std::fs::File::open(vehicles)?)
}

/// Like [`load_vehicle_catalog`] but accepts any `Read` sources.
pub fn load_vehicle_catalog_reader<T: Read, V: Read>(types: T, vehicles: V) -> InputResult<VehicleCatalog> {
    let mut catalog = VehicleCatalog::new();

    for result in csv::Reader::from_reader(types).deserialize::<VehicleTypeRecord>() {
        let r = result?;
        catalog.add_type(VehicleType::new(
            r.id,
            r.capacity,
            CostInformation {
                per_second: r.cost_per_second,
                per_meter:  r.cost_per_meter,
                fixed:      r.fixed_cost,
            },
        ));
    }

    for result in csv::Reader::from_reader(vehicles).deserialize::<VehicleRecord>() {
        let r = result?;
        catalog.assign(r.vehicle_id, r.vehicle_type_id)?;
    }

    Ok(catalog)
}
