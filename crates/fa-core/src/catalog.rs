//! Vehicle-type catalog: vehicle → type, type → capacity and cost rates.
//!
//! The catalog is owned by the scenario and only read by the analysis.  It is
//! exposed through the [`VehicleTypeCatalog`] trait so trackers and report
//! builders never depend on how the scenario stores its fleet.

use std::collections::BTreeMap;

use crate::{CoreError, CoreResult, VehicleId, VehicleTypeId};

// ── Vehicle types ─────────────────────────────────────────────────────────────

/// Monetary cost rates of a vehicle type.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostInformation {
    /// EUR per second of tour duration.
    pub per_second: f64,
    /// EUR per metre driven.
    pub per_meter:  f64,
    /// EUR per vehicle used, independent of duration and distance.
    pub fixed:      f64,
}

/// A class of vehicle sharing capacity and cost rates.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleType {
    pub id:       VehicleTypeId,
    /// Load units the vehicle can carry.
    pub capacity: f64,
    pub costs:    CostInformation,
}

impl VehicleType {
    pub fn new(id: impl Into<VehicleTypeId>, capacity: f64, costs: CostInformation) -> Self {
        Self { id: id.into(), capacity, costs }
    }
}

// ── VehicleTypeCatalog ────────────────────────────────────────────────────────

/// Read-only lookup into the scenario's vehicle fleet.
///
/// `Sync` so the trackers can replay the stream on separate threads.
pub trait VehicleTypeCatalog: Sync {
    /// The type of `vehicle`, or `None` if the scenario does not know it.
    fn vehicle_type_of(&self, vehicle: &VehicleId) -> Option<&VehicleType>;

    /// Every vehicle type in the catalog snapshot, used or not.
    fn vehicle_types(&self) -> Box<dyn Iterator<Item = &VehicleType> + '_>;
}

/// In-memory catalog backed by ordered maps.
#[derive(Clone, Debug, Default)]
pub struct VehicleCatalog {
    types:    BTreeMap<VehicleTypeId, VehicleType>,
    vehicles: BTreeMap<VehicleId, VehicleTypeId>,
}

impl VehicleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vehicle type.  A type with the same ID is replaced.
    pub fn add_type(&mut self, vehicle_type: VehicleType) -> &mut Self {
        self.types.insert(vehicle_type.id.clone(), vehicle_type);
        self
    }

    /// Bind `vehicle` to an already registered type.
    pub fn assign(
        &mut self,
        vehicle: impl Into<VehicleId>,
        type_id: impl Into<VehicleTypeId>,
    ) -> CoreResult<&mut Self> {
        let type_id = type_id.into();
        if !self.types.contains_key(&type_id) {
            return Err(CoreError::UnknownVehicleType(type_id));
        }
        self.vehicles.insert(vehicle.into(), type_id);
        Ok(self)
    }

    pub fn vehicle_type(&self, id: &VehicleTypeId) -> Option<&VehicleType> {
        self.types.get(id)
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }
}

impl VehicleTypeCatalog for VehicleCatalog {
    fn vehicle_type_of(&self, vehicle: &VehicleId) -> Option<&VehicleType> {
        self.vehicles.get(vehicle).and_then(|t| self.types.get(t))
    }

    fn vehicle_types(&self) -> Box<dyn Iterator<Item = &VehicleType> + '_> {
        Box::new(self.types.values())
    }
}
