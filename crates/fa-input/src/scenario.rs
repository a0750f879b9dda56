//! Load every collaborator one analysis run needs.

use tracing::info;

use fa_core::{Carriers, FreightEvent, InputPaths, LinkNetwork, VehicleCatalog};

use crate::{InputResult, load_carriers_json, load_events_csv, load_network_csv, load_vehicle_catalog};

/// The read-only inputs of one analysis run.
pub struct Scenario {
    pub events:   Vec<FreightEvent>,
    pub catalog:  VehicleCatalog,
    pub network:  LinkNetwork,
    pub carriers: Carriers,
}

impl Scenario {
    pub fn load(paths: &InputPaths) -> InputResult<Self> {
        let catalog = load_vehicle_catalog(&paths.vehicle_types, &paths.vehicles)?;
        let network = load_network_csv(&paths.links)?;
        let carriers = load_carriers_json(&paths.carriers)?;
        let events = load_events_csv(&paths.events)?;
        info!(
            events        = events.len(),
            vehicle_types = catalog.type_count(),
            vehicles      = catalog.vehicle_count(),
            links         = network.link_count(),
            carriers      = carriers.len(),
            "scenario loaded"
        );
        Ok(Self { events, catalog, network, carriers })
    }
}
