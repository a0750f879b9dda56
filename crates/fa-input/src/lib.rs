//! `fa-input`: loaders for the scenario files an analysis run reads.
//!
//! | Module       | Loads                                     | Format |
//! |--------------|-------------------------------------------|--------|
//! | [`events`]   | `Vec<FreightEvent>`                       | CSV    |
//! | [`catalog`]  | `VehicleCatalog` (types + assignments)    | CSV    |
//! | [`network`]  | `LinkNetwork`                             | CSV    |
//! | [`carriers`] | `Carriers`                                | JSON   |
//! | [`config`]   | `AnalysisConfig`                          | JSON   |
//! | [`scenario`] | all of the above from one `InputPaths`    |        |
//!
//! Every `load_*` function taking a `Path` has a `*_reader` twin accepting
//! any `Read` source (pass a `std::io::Cursor` in tests).

pub mod carriers;
pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod network;
pub mod scenario;


pub use carriers::{load_carriers_json, load_carriers_reader};
pub use catalog::{load_vehicle_catalog, load_vehicle_catalog_reader};
pub use config::{load_config, load_config_reader, resolve_relative};
pub use error::{InputError, InputResult};
pub use events::{load_events_csv, load_events_reader};
pub use network::{load_network_csv, load_network_reader};
pub use scenario::Scenario;
