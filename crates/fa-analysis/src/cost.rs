//! Cost model: duration and distance priced with a vehicle type's rates.

use fa_core::CostInformation;

/// Cost of one vehicle (or the sum over several vehicles of one type).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CostBreakdown {
    pub var_cost_time:     f64,
    pub var_cost_distance: f64,
    pub fixed_cost:        f64,
    pub total_cost:        f64,
}

/// Price `duration_s` seconds and `distance_m` metres for one vehicle.
///
/// Pure arithmetic; NaN inputs propagate to NaN outputs.
pub fn vehicle_cost(duration_s: f64, distance_m: f64, rates: &CostInformation) -> CostBreakdown {
    fleet_cost(duration_s, distance_m, 1, rates)
}

/// Price summed duration and distance of `vehicles` vehicles of one type.
///
/// The fixed cost is charged once per vehicle, not per second or metre.
pub fn fleet_cost(
    sum_duration_s: f64,
    sum_distance_m: f64,
    vehicles:       usize,
    rates:          &CostInformation,
) -> CostBreakdown {
    let var_cost_time = sum_duration_s * rates.per_second;
    let var_cost_distance = sum_distance_m * rates.per_meter;
    let fixed_cost = vehicles as f64 * rates.fixed;
    CostBreakdown {
        var_cost_time,
        var_cost_distance,
        fixed_cost,
        total_cost: fixed_cost + var_cost_time + var_cost_distance,
    }
}
