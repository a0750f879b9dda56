//! Carrier loader.
//!
//! The carrier file is a JSON array of carriers:
//!
//! ```json
//! [
//!   {
//!     "id": "carrier_1",
//!     "selected_plan": {
//!       "score": -310.5,
//!       "solver_score": 295.2,
//!       "scheduled_tours": [{ "tour": "tour_1", "vehicle": "veh_1" }]
//!     },
//!     "shipments": ["shp_1", "shp_2"],
//!     "services": []
//!   }
//! ]
//! ```

use std::io::Read;
use std::path::Path;

use fa_core::{Carrier, Carriers};

use crate::{InputError, InputResult};

pub fn load_carriers_json(path: &Path) -> InputResult<Carriers> {
    load_carriers_reader(std::fs::File::open(path)?)
}

/// Like [`load_carriers_json`] but accepts any `Read` source.
///
/// Carrier IDs must be unique.
pub fn load_carriers_reader<R: Read>(reader: R) -> InputResult<Carriers> {
    let list: Vec<Carrier> = serde_json::from_reader(reader)?;
    let mut carriers = Carriers::new();
    for carrier in list {
        let id = carrier.id.clone();
        if carriers.insert(carrier).is_some() {
            return Err(InputError::Parse(format!("carrier {id} listed twice")));
        }
    }
    Ok(carriers)
}
