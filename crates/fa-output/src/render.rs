//! Text rendering of each report.
//!
//! Header strings and cell formats are a fixed contract with the dashboard
//! that reads these files; change them only together with the dashboard.
//! Every renderer is a pure function of its rows, so rendering the same final
//! state twice yields identical bytes.

use csv::{Terminator, Writer, WriterBuilder};

use fa_analysis::CarrierSummary;

use crate::format::{profile, real, round2};
use crate::row::{GeneralStats, LoadSummary, VehicleCostRow, VehicleLoadRow, VehicleTypeCostRow};
use crate::OutputResult;

// ── Headers ───────────────────────────────────────────────────────────────────

const LOAD_PER_VEHICLE_HEADER: &str =
    "vehicleId ; vehicleTypeId ; capacity ; maxLoad ; unusedCapacity; load state during tour";

const TIME_DISTANCE_PER_VEHICLE_HEADER: &str = "vehicleId ; carrierId ; vehicleTypeId ; tourId ; \
     tourDuration[s] ; travelDistance[m] ; costPerSecond[EUR/s] ; costPerMeter[EUR/m] ; \
     fixedCosts[EUR] ; varCostsTime[EUR] ; varCostsDist[EUR] ; totalCosts[EUR]";

const TIME_DISTANCE_PER_TYPE_HEADER: &str = "vehicleTypeId ; nuOfVehicles ; SumOfTourDuration[s] ; \
     SumOfTravelDistances[m] ; costPerSecond[EUR/s]; costPerMeter[EUR/m] ; fixedCosts[EUR/veh] ;\
     varCostsTime[EUR]; varCostsDist[EUR] ; fixedCosts[EUR] ; totalCosts[EUR]";

// ── Tables ────────────────────────────────────────────────────────────────────

pub fn render_load_per_vehicle(rows: &[VehicleLoadRow]) -> OutputResult<String> {
    let mut w = table_writer(LOAD_PER_VEHICLE_HEADER)?;
    for row in rows {
        w.write_record(&[
            row.vehicle.to_string(),
            row.vehicle_type.to_string(),
            real(row.capacity),
            row.max_load.to_string(),
            real(row.unused_capacity),
            profile(&row.profile),
        ])?;
    }
    finish(w)
}

pub fn render_time_distance_per_vehicle(rows: &[VehicleCostRow]) -> OutputResult<String> {
    let mut w = table_writer(TIME_DISTANCE_PER_VEHICLE_HEADER)?;
    for row in rows {
        w.write_record(&[
            row.vehicle.to_string(),
            row.carrier.to_string(),
            row.vehicle_type.to_string(),
            row.tour.to_string(),
            real(row.duration_s),
            real(row.distance_m),
            real(row.rates.per_second),
            real(row.rates.per_meter),
            real(row.rates.fixed),
            real(row.cost.var_cost_time),
            real(row.cost.var_cost_distance),
            real(row.cost.total_cost),
        ])?;
    }
    finish(w)
}

pub fn render_time_distance_per_vehicle_type(rows: &[VehicleTypeCostRow]) -> OutputResult<String> {
    let mut w = table_writer(TIME_DISTANCE_PER_TYPE_HEADER)?;
    for row in rows {
        w.write_record(&[
            row.vehicle_type.to_string(),
            row.vehicles.to_string(),
            real(row.sum_duration_s),
            real(row.sum_distance_m),
            real(row.rates.per_second),
            real(row.rates.per_meter),
            real(row.rates.fixed),
            real(row.cost.var_cost_time),
            real(row.cost.var_cost_distance),
            real(row.cost.fixed_cost),
            real(row.cost.total_cost),
        ])?;
    }
    finish(w)
}

// ── Scalar tiles ──────────────────────────────────────────────────────────────

/// `label,value,icon` rows.
pub fn render_load_summary(summary: &LoadSummary) -> OutputResult<String> {
    let types = summary.used_vehicle_types.to_string();
    let utilization = format!("{:.1}%", summary.utilization_percent());

    let mut w = tile_writer();
    w.write_record(["Used vehicle types", types.as_str(), "car"])?;
    w.write_record(["Average use of capacity", utilization.as_str(), "chart-pie"])?;
    finish(w)
}

pub fn render_general_stats(stats: &GeneralStats) -> OutputResult<String> {
    let c = &stats.carriers;
    let mut w = tile_writer();
    for (label, value) in [
        ("Number of carriers", c.carriers.to_string()),
        ("Total tour duration", format!("{:.2} h", round2(stats.total_duration_s / 3600.0))),
        ("Total travel distance", format!("{:.2} km", round2(stats.total_distance_m / 1000.0))),
        ("Number of tours", c.tours.to_string()),
        ("Number of shipments", c.shipments.to_string()),
        ("Number of services", c.services.to_string()),
        ("Total MATSim Score", real(c.total_score)),
        ("Total jsprit Score", real(round2(c.total_solver_score))),
    ] {
        w.write_record([label, value.as_str(), ""])?;
    }
    finish(w)
}

pub fn render_carrier_summary(summary: &CarrierSummary) -> OutputResult<String> {
    let mut w = tile_writer();
    for (label, value) in [
        ("Number of carriers", summary.carriers.to_string()),
        ("Number of tours", summary.tours.to_string()),
        ("Number of shipments", summary.shipments.to_string()),
        ("Number of services", summary.services.to_string()),
        ("Total MATSim Score", real(summary.total_score)),
        ("Total jsprit Score", real(summary.total_solver_score)),
    ] {
        w.write_record([label, value.as_str(), ""])?;
    }
    finish(w)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `;`-separated writer with the header already written.  The header is split
/// on `;` so its spacing survives byte-for-byte.
fn table_writer(header: &str) -> OutputResult<Writer<Vec<u8>>> {
    let mut w = WriterBuilder::new()
        .delimiter(b';')
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    w.write_record(header.split(';'))?;
    Ok(w)
}

fn tile_writer() -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .delimiter(b',')
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn finish(w: Writer<Vec<u8>>) -> OutputResult<String> {
    let bytes = w.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
