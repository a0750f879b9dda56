//! Tour duration and distance per vehicle and per vehicle type.
//!
//! # Tour lifecycle
//!
//! Each `(CarrierId, TourId)` key moves through three states:
//!
//! ```text
//! no-start ──tour_start──▶ started ──tour_end──▶ ended
//!              ▲    │
//!              └────┘ duplicate tour_start: the later start time wins
//! ```
//!
//! A tour end for a key that is not `started` is a missing-pairing error.
//! The key is dropped once the tour ends.
//!
//! Link-enter events add the traversed link's length to the vehicle and to its
//! vehicle type.  The tracker assumes each tour's events arrive as start, then
//! link enters, then end; it does not check that order.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use fa_core::{
    CarrierId, FreightEvent, LinkId, NetworkGeometry, TourId, VehicleId, VehicleType,
    VehicleTypeCatalog, VehicleTypeId,
};

use crate::{AnalysisError, AnalysisResult, EventObserver};

type TourKey = (CarrierId, TourId);

// ── Aggregates ────────────────────────────────────────────────────────────────

/// Everything the tracker knows about one vehicle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VehicleAggregate {
    /// Carrier of the vehicle's first completed tour.
    pub carrier:         Option<CarrierId>,
    /// The vehicle's first completed tour.
    pub tour:            Option<TourId>,
    /// Tour duration in seconds; `None` until a tour ends.
    pub duration:        Option<f64>,
    /// Metres driven, summed over link-enter events.
    pub distance:        f64,
    /// Type resolved from the catalog the first time the vehicle was seen.
    /// `None` if the catalog does not know the vehicle.  Never rebound.
    pub vehicle_type:    Option<VehicleType>,
    pub completed_tours: u32,
}

impl VehicleAggregate {
    /// The vehicle completed at least one tour.
    pub fn has_tour(&self) -> bool {
        self.duration.is_some()
    }
}

/// Running sums for one vehicle type.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TypeTotals {
    pub sum_duration: f64,
    pub sum_distance: f64,
}

// ── TourTracker ───────────────────────────────────────────────────────────────

/// Tracks tour brackets and link traversals.  See the module docs.
pub struct TourTracker<'a, C: VehicleTypeCatalog, N: NetworkGeometry> {
    catalog:     &'a C,
    network:     &'a N,
    tour_starts: FxHashMap<TourKey, f64>,
    vehicles:    BTreeMap<VehicleId, VehicleAggregate>,
    types:       BTreeMap<VehicleTypeId, TypeTotals>,
}

impl<'a, C: VehicleTypeCatalog, N: NetworkGeometry> TourTracker<'a, C, N> {
    pub fn new(catalog: &'a C, network: &'a N) -> Self {
        Self {
            catalog,
            network,
            tour_starts: FxHashMap::default(),
            vehicles:    BTreeMap::new(),
            types:       BTreeMap::new(),
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn catalog(&self) -> &'a C {
        self.catalog
    }

    /// Tour duration of `vehicle` in seconds, if it completed a tour.
    pub fn duration(&self, vehicle: &VehicleId) -> Option<f64> {
        self.vehicles.get(vehicle).and_then(|a| a.duration)
    }

    /// Metres driven by `vehicle`, if it was ever seen.
    pub fn distance(&self, vehicle: &VehicleId) -> Option<f64> {
        self.vehicles.get(vehicle).map(|a| a.distance)
    }

    /// Summed tour duration of all vehicles of `vehicle_type`.
    pub fn type_duration(&self, vehicle_type: &VehicleTypeId) -> f64 {
        self.types.get(vehicle_type).map_or(0.0, |t| t.sum_duration)
    }

    /// Summed distance of all vehicles of `vehicle_type`.
    pub fn type_distance(&self, vehicle_type: &VehicleTypeId) -> f64 {
        self.types.get(vehicle_type).map_or(0.0, |t| t.sum_distance)
    }

    pub fn resolved_type(&self, vehicle: &VehicleId) -> Option<&VehicleType> {
        self.vehicles.get(vehicle).and_then(|a| a.vehicle_type.as_ref())
    }

    pub fn aggregate(&self, vehicle: &VehicleId) -> Option<&VehicleAggregate> {
        self.vehicles.get(vehicle)
    }

    /// Every vehicle seen in a tour end or link enter, ascending by ID.
    pub fn vehicles(&self) -> impl Iterator<Item = (&VehicleId, &VehicleAggregate)> {
        self.vehicles.iter()
    }

    /// Vehicles with a completed tour, ascending by ID.
    pub fn toured_vehicles(&self) -> impl Iterator<Item = (&VehicleId, &VehicleAggregate)> {
        self.vehicles.iter().filter(|(_, a)| a.has_tour())
    }

    /// Vehicle types resolved for any observed vehicle, ascending by ID.
    /// This may include types that are missing from the catalog snapshot.
    pub fn observed_types(&self) -> BTreeMap<&VehicleTypeId, &VehicleType> {
        self.vehicles
            .values()
            .filter_map(|a| a.vehicle_type.as_ref())
            .map(|t| (&t.id, t))
            .collect()
    }

    /// Number of vehicles of `vehicle_type` that completed a tour.
    pub fn vehicle_count_of_type(&self, vehicle_type: &VehicleTypeId) -> usize {
        self.toured_vehicles()
            .filter(|(_, a)| a.vehicle_type.as_ref().is_some_and(|t| &t.id == vehicle_type))
            .count()
    }

    /// Tours that started but have not ended.
    pub fn open_tours(&self) -> usize {
        self.tour_starts.len()
    }

    // ── Event handlers ────────────────────────────────────────────────────

    fn tour_start(&mut self, carrier: &CarrierId, tour: &TourId, time: f64) {
        // Last write wins.  A repeated start is logged, not rejected.
        // TODO: confirm with the dashboard owners whether the first start should win.
        let key = (carrier.clone(), tour.clone());
        if let Some(previous) = self.tour_starts.insert(key, time) {
            warn!(%carrier, %tour, previous, time, "duplicate tour start; keeping the later start time");
        }
    }

    fn tour_end(
        &mut self,
        carrier: &CarrierId,
        vehicle: &VehicleId,
        tour:    &TourId,
        time:    f64,
    ) -> AnalysisResult<()> {
        let key = (carrier.clone(), tour.clone());
        let start = self.tour_starts.remove(&key).ok_or_else(|| AnalysisError::MissingTourStart {
            carrier: carrier.clone(),
            tour:    tour.clone(),
            time,
        })?;
        let duration = time - start;

        let agg = vehicle_aggregate(&mut self.vehicles, self.catalog, vehicle);
        match agg.duration {
            None => {
                agg.duration = Some(duration);
                agg.carrier = Some(carrier.clone());
                agg.tour = Some(tour.clone());
            }
            Some(previous) => {
                warn!(%vehicle, %carrier, %tour, "vehicle completed more than one tour; durations are summed");
                agg.duration = Some(previous + duration);
            }
        }
        agg.completed_tours += 1;

        if let Some(ty) = &agg.vehicle_type {
            self.types.entry(ty.id.clone()).or_default().sum_duration += duration;
        }
        Ok(())
    }

    fn link_enter(&mut self, vehicle: &VehicleId, link: &LinkId) -> AnalysisResult<()> {
        let length = self.network.link_length(link).ok_or_else(|| AnalysisError::UnknownLink {
            vehicle: vehicle.clone(),
            link:    link.clone(),
        })?;

        let agg = vehicle_aggregate(&mut self.vehicles, self.catalog, vehicle);
        agg.distance += length;

        if let Some(ty) = &agg.vehicle_type {
            self.types.entry(ty.id.clone()).or_default().sum_distance += length;
        }
        Ok(())
    }
}

/// Fetch the aggregate of `vehicle`, creating it and resolving its type on
/// first sight.
fn vehicle_aggregate<'m, C: VehicleTypeCatalog>(
    vehicles: &'m mut BTreeMap<VehicleId, VehicleAggregate>,
    catalog:  &C,
    vehicle:  &VehicleId,
) -> &'m mut VehicleAggregate {
    vehicles.entry(vehicle.clone()).or_insert_with(|| {
        let vehicle_type = catalog.vehicle_type_of(vehicle).cloned();
        if vehicle_type.is_none() {
            debug!(%vehicle, "vehicle not in catalog; its distance is not attributed to a type");
        }
        VehicleAggregate { vehicle_type, ..VehicleAggregate::default() }
    })
}

impl<C: VehicleTypeCatalog, N: NetworkGeometry> EventObserver for TourTracker<'_, C, N> {
    fn observe(&mut self, event: &FreightEvent) -> AnalysisResult<()> {
        match event {
            FreightEvent::TourStart { carrier, tour, time, .. } => {
                self.tour_start(carrier, tour, *time);
            }
            FreightEvent::TourEnd { carrier, vehicle, tour, time } => {
                self.tour_end(carrier, vehicle, tour, *time)?;
            }
            FreightEvent::LinkEnter { vehicle, link, .. } => {
                self.link_enter(vehicle, link)?;
            }
            // Load changes are the load tracker's concern.
            FreightEvent::ShipmentPickupStart { .. } | FreightEvent::ShipmentDeliveryStart { .. } => {}
        }
        Ok(())
    }

    fn on_stream_end(&mut self) {
        if !self.tour_starts.is_empty() {
            warn!(open_tours = self.tour_starts.len(), "event stream ended with tours that never ended");
        }
    }
}
