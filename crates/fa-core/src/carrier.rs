//! Carrier collection: the selected plan, shipments and services of every
//! carrier in the scenario.

use std::collections::BTreeMap;

use crate::{CarrierId, ServiceId, ShipmentId, TourId, VehicleId};

/// One tour of a carrier's selected plan.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduledTour {
    pub tour:    TourId,
    pub vehicle: VehicleId,
}

/// The plan the carrier executed in the simulation.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarrierPlan {
    /// Score assigned by the simulation's scoring.
    pub score:           f64,
    /// Score assigned by the tour solver that built the plan.
    pub solver_score:    f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub scheduled_tours: Vec<ScheduledTour>,
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Carrier {
    pub id:            CarrierId,
    pub selected_plan: CarrierPlan,
    #[cfg_attr(feature = "serde", serde(default))]
    pub shipments:     Vec<ShipmentId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub services:      Vec<ServiceId>,
}

impl Carrier {
    pub fn new(id: impl Into<CarrierId>, selected_plan: CarrierPlan) -> Self {
        Self {
            id:        id.into(),
            selected_plan,
            shipments: Vec::new(),
            services:  Vec::new(),
        }
    }
}

/// All carriers of a scenario, iterated in ascending `CarrierId` order.
#[derive(Clone, Debug, Default)]
pub struct Carriers {
    carriers: BTreeMap<CarrierId, Carrier>,
}

impl Carriers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `carrier`, returning any carrier previously stored under its ID.
    pub fn insert(&mut self, carrier: Carrier) -> Option<Carrier> {
        self.carriers.insert(carrier.id.clone(), carrier)
    }

    pub fn get(&self, id: &CarrierId) -> Option<&Carrier> {
        self.carriers.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Carrier> {
        self.carriers.values()
    }

    pub fn len(&self) -> usize {
        self.carriers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carriers.is_empty()
    }
}

impl FromIterator<Carrier> for Carriers {
    fn from_iter<I: IntoIterator<Item = Carrier>>(iter: I) -> Self {
        let mut carriers = Carriers::new();
        for c in iter {
            carriers.insert(c);
        }
        carriers
    }
}
