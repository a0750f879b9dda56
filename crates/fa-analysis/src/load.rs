//! Per-vehicle cumulative load profiles.

use std::collections::BTreeMap;

use fa_core::{FreightEvent, VehicleId};

use crate::{AnalysisError, AnalysisResult, EventObserver};

/// Tracks the running load of every vehicle from pickup and delivery events.
///
/// A vehicle's profile holds one entry per pickup or delivery, in arrival
/// order: the first entry is the first pickup's demand and each later entry is
/// the previous one plus (pickup) or minus (delivery) the event's demand.
/// Loads are signed; nothing is clamped.
#[derive(Debug, Default)]
pub struct LoadTracker {
    profiles: BTreeMap<VehicleId, Vec<i64>>,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The load profile of `vehicle`, or `None` if it never picked anything up.
    pub fn load_profile(&self, vehicle: &VehicleId) -> Option<&[i64]> {
        self.profiles.get(vehicle).map(Vec::as_slice)
    }

    /// All profiles in ascending `VehicleId` order.
    pub fn profiles(&self) -> impl Iterator<Item = (&VehicleId, &[i64])> {
        self.profiles.iter().map(|(v, p)| (v, p.as_slice()))
    }

    pub fn vehicle_count(&self) -> usize {
        self.profiles.len()
    }

    fn pickup(&mut self, vehicle: &VehicleId, demand: u32) {
        let demand = i64::from(demand);
        match self.profiles.get_mut(vehicle) {
            Some(profile) => {
                let last = profile.last().copied().unwrap_or(0);
                profile.push(last + demand);
            }
            None => {
                self.profiles.insert(vehicle.clone(), vec![demand]);
            }
        }
    }

    fn delivery(&mut self, vehicle: &VehicleId, demand: u32, time: f64) -> AnalysisResult<()> {
        let profile = self
            .profiles
            .get_mut(vehicle)
            .ok_or_else(|| AnalysisError::MissingPickup { vehicle: vehicle.clone(), time })?;
        // Profiles are created non-empty and only ever grow.
        let last = profile.last().copied().unwrap_or(0);
        profile.push(last - i64::from(demand));
        Ok(())
    }
}

impl EventObserver for LoadTracker {
    fn observe(&mut self, event: &FreightEvent) -> AnalysisResult<()> {
        match event {
            FreightEvent::ShipmentPickupStart { vehicle, capacity_demand, .. } => {
                self.pickup(vehicle, *capacity_demand);
            }
            FreightEvent::ShipmentDeliveryStart { vehicle, capacity_demand, time, .. } => {
                self.delivery(vehicle, *capacity_demand, *time)?;
            }
            // Tour brackets and link traversals carry no load change.
            FreightEvent::TourStart { .. }
            | FreightEvent::TourEnd { .. }
            | FreightEvent::LinkEnter { .. } => {}
        }
        Ok(())
    }
}
