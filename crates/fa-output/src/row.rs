//! Plain data rows derived from a finished analysis.
//!
//! Each `*_rows` / `*_stats` function is a pure query over the final tracker
//! state.  Values are kept unrounded; rendering applies the dashboard's
//! rounding.

use std::collections::{BTreeMap, BTreeSet};

use tracing::error;

use fa_analysis::{CarrierSummary, CostBreakdown, FreightAnalysis, fleet_cost, vehicle_cost};
use fa_core::{
    CarrierId, CostInformation, NetworkGeometry, TourId, VehicleId, VehicleType, VehicleTypeCatalog,
    VehicleTypeId,
};

use crate::{OutputError, OutputResult};

// ── Rows ──────────────────────────────────────────────────────────────────────

/// Load profile of one vehicle against its capacity.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleLoadRow {
    pub vehicle:         VehicleId,
    pub vehicle_type:    VehicleTypeId,
    pub capacity:        f64,
    pub max_load:        i64,
    /// `capacity - max_load`; negative when the vehicle was overloaded.
    pub unused_capacity: f64,
    pub profile:         Vec<i64>,
}

impl VehicleLoadRow {
    /// `max_load / capacity`.
    pub fn utilization(&self) -> f64 {
        self.max_load as f64 / self.capacity
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoadSummary {
    pub used_vehicle_types:  usize,
    /// Mean utilization over all vehicles with a load profile, as a fraction.
    pub mean_utilization:    f64,
}

impl LoadSummary {
    /// Mean utilization as a percentage rounded to the nearest integer.
    pub fn utilization_percent(&self) -> f64 {
        (self.mean_utilization * 100.0).round()
    }
}

/// Time, distance and cost of one vehicle's tour.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleCostRow {
    pub vehicle:      VehicleId,
    pub carrier:      CarrierId,
    pub vehicle_type: VehicleTypeId,
    pub tour:         TourId,
    pub duration_s:   f64,
    pub distance_m:   f64,
    pub rates:        CostInformation,
    pub cost:         CostBreakdown,
}

/// Summed time, distance and cost of all vehicles of one type.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleTypeCostRow {
    pub vehicle_type:   VehicleTypeId,
    pub vehicles:       usize,
    pub sum_duration_s: f64,
    pub sum_distance_m: f64,
    pub rates:          CostInformation,
    pub cost:           CostBreakdown,
}

/// Scenario-wide totals for the dashboard tiles.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneralStats {
    pub carriers:         CarrierSummary,
    pub total_duration_s: f64,
    pub total_distance_m: f64,
}

// ── Derivation ────────────────────────────────────────────────────────────────

/// One row per vehicle with a load profile, ascending by vehicle.
pub fn load_rows<C, N>(analysis: &FreightAnalysis<'_, C, N>) -> OutputResult<Vec<VehicleLoadRow>>
where
    C: VehicleTypeCatalog,
    N: NetworkGeometry,
{
    let catalog = analysis.catalog();
    analysis
        .load
        .profiles()
        .map(|(vehicle, profile)| {
            let ty = catalog
                .vehicle_type_of(vehicle)
                .ok_or_else(|| OutputError::UnresolvedVehicleType(vehicle.clone()))?;
            // Profiles are never empty.
            let max_load = profile.iter().copied().max().unwrap_or(0);
            Ok(VehicleLoadRow {
                vehicle:         vehicle.clone(),
                vehicle_type:    ty.id.clone(),
                capacity:        ty.capacity,
                max_load,
                unused_capacity: ty.capacity - max_load as f64,
                profile:         profile.to_vec(),
            })
        })
        .collect()
}

/// Distinct vehicle types and mean utilization over `rows`.
///
/// Fails with [`OutputError::DegenerateAggregate`] when there are no rows or a
/// vehicle type has no capacity, since the mean is then undefined.
pub fn load_summary(rows: &[VehicleLoadRow]) -> OutputResult<LoadSummary> {
    if rows.is_empty() {
        return Err(OutputError::DegenerateAggregate(
            "mean capacity utilization over zero vehicles".into(),
        ));
    }
    if let Some(row) = rows.iter().find(|r| r.capacity == 0.0) {
        return Err(OutputError::DegenerateAggregate(format!(
            "vehicle type {} has zero capacity; utilization of vehicle {} is undefined",
            row.vehicle_type, row.vehicle
        )));
    }

    let types: BTreeSet<&VehicleTypeId> = rows.iter().map(|r| &r.vehicle_type).collect();
    let mean_utilization = rows.iter().map(VehicleLoadRow::utilization).sum::<f64>() / rows.len() as f64;
    Ok(LoadSummary { used_vehicle_types: types.len(), mean_utilization })
}

/// One row per vehicle with a completed tour, ascending by vehicle.
pub fn vehicle_cost_rows<C, N>(analysis: &FreightAnalysis<'_, C, N>) -> OutputResult<Vec<VehicleCostRow>>
where
    C: VehicleTypeCatalog,
    N: NetworkGeometry,
{
    let mut rows = Vec::new();
    for (vehicle, agg) in analysis.tours.toured_vehicles() {
        let ty = agg
            .vehicle_type
            .as_ref()
            .ok_or_else(|| OutputError::UnresolvedVehicleType(vehicle.clone()))?;
        // Toured vehicles always carry their first tour's carrier and tour ids.
        let (Some(carrier), Some(tour), Some(duration_s)) = (&agg.carrier, &agg.tour, agg.duration) else {
            error!(%vehicle, "completed tour without carrier or tour id; row omitted");
            debug_assert!(false, "toured vehicle {vehicle} has no carrier or tour id");
            continue;
        };
        rows.push(VehicleCostRow {
            vehicle:      vehicle.clone(),
            carrier:      carrier.clone(),
            vehicle_type: ty.id.clone(),
            tour:         tour.clone(),
            duration_s,
            distance_m:   agg.distance,
            rates:        ty.costs,
            cost:         vehicle_cost(duration_s, agg.distance, &ty.costs),
        });
    }
    Ok(rows)
}

/// One row per vehicle type in the catalog snapshot or observed in the
/// stream, ascending by type.  Unused types get zero sums.
///
/// Fails if any vehicle seen by the tour tracker has no resolvable type, since
/// its duration or distance would be missing from every type sum.
pub fn vehicle_type_cost_rows<C, N>(analysis: &FreightAnalysis<'_, C, N>) -> OutputResult<Vec<VehicleTypeCostRow>>
where
    C: VehicleTypeCatalog,
    N: NetworkGeometry,
{
    let tours = &analysis.tours;
    if let Some((vehicle, _)) = tours.vehicles().find(|(_, a)| a.vehicle_type.is_none()) {
        return Err(OutputError::UnresolvedVehicleType(vehicle.clone()));
    }

    let mut types: BTreeMap<&VehicleTypeId, &VehicleType> =
        analysis.catalog().vehicle_types().map(|t| (&t.id, t)).collect();
    for (id, ty) in tours.observed_types() {
        types.entry(id).or_insert(ty);
    }

    Ok(types
        .into_values()
        .map(|ty| {
            let vehicles = tours.vehicle_count_of_type(&ty.id);
            let sum_duration_s = tours.type_duration(&ty.id);
            let sum_distance_m = tours.type_distance(&ty.id);
            VehicleTypeCostRow {
                vehicle_type: ty.id.clone(),
                vehicles,
                sum_duration_s,
                sum_distance_m,
                rates: ty.costs,
                cost: fleet_cost(sum_duration_s, sum_distance_m, vehicles, &ty.costs),
            }
        })
        .collect())
}

/// Totals over every vehicle with a completed tour plus the carrier summary.
pub fn general_stats<C, N>(analysis: &FreightAnalysis<'_, C, N>, carriers: CarrierSummary) -> GeneralStats
where
    C: VehicleTypeCatalog,
    N: NetworkGeometry,
{
    let (total_duration_s, total_distance_m) = analysis
        .tours
        .toured_vehicles()
        .fold((0.0, 0.0), |(dur, dist), (_, agg)| {
            (dur + agg.duration.unwrap_or(0.0), dist + agg.distance)
        });
    GeneralStats { carriers, total_duration_s, total_distance_m }
}
