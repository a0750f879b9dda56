//! Carrier-level totals over the scenario's carrier collection.

use fa_core::Carriers;

/// Totals over every carrier's selected plan and demand.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CarrierSummary {
    pub carriers:           usize,
    pub tours:              usize,
    pub shipments:          usize,
    pub services:           usize,
    pub total_score:        f64,
    pub total_solver_score: f64,
}

impl CarrierSummary {
    /// Sum over `carriers` in ascending `CarrierId` order, so floating-point
    /// totals are reproducible.
    pub fn from_carriers(carriers: &Carriers) -> Self {
        carriers.iter().fold(CarrierSummary::default(), |mut acc, carrier| {
            let plan = &carrier.selected_plan;
            acc.carriers += 1;
            acc.tours += plan.scheduled_tours.len();
            acc.shipments += carrier.shipments.len();
            acc.services += carrier.services.len();
            acc.total_score += plan.score;
            acc.total_solver_score += plan.solver_score;
            acc
        })
    }
}
