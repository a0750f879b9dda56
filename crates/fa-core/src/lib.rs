//! `fa-core`: foundational types for the freight analysis workspace.
//!
//! Everything here describes the scenario the analysis reads but never
//! changes: the event stream, the fleet, the network and the carriers.  This
//! crate has no `fa-*` dependencies and only `thiserror` (plus optional
//! `serde`) as external ones.
//!
//! # What lives here
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`ids`]       | `VehicleId`, `VehicleTypeId`, `CarrierId`, `TourId`, `LinkId`, … |
//! | [`event`]     | `FreightEvent`, `EventKind`                                  |
//! | [`catalog`]   | `VehicleType`, `CostInformation`, `VehicleTypeCatalog`, `VehicleCatalog` |
//! | [`network`]   | `NetworkGeometry`, `LinkNetwork`, `LinkNetworkBuilder`       |
//! | [`carrier`]   | `Carrier`, `CarrierPlan`, `ScheduledTour`, `Carriers`        |
//! | [`config`]    | `AnalysisConfig`, `InputPaths`                               |
//! | [`error`]     | `CoreError`, `CoreResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                                      |
//! |---------|-----------------------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. Required by `fa-input`. |

pub mod carrier;
pub mod catalog;
pub mod config;
pub mod error;
pub mod event;
pub mod ids;
pub mod network;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use carrier::{Carrier, CarrierPlan, Carriers, ScheduledTour};
pub use catalog::{CostInformation, VehicleCatalog, VehicleType, VehicleTypeCatalog};
pub use config::{AnalysisConfig, InputPaths};
pub use error::{CoreError, CoreResult};
pub use event::{EventKind, FreightEvent};
pub use ids::{CarrierId, LinkId, ServiceId, ShipmentId, TourId, VehicleId, VehicleTypeId};
pub use network::{LinkNetwork, LinkNetworkBuilder, NetworkGeometry};
