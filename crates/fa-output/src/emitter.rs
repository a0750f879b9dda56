//! `ReportEmitter`: renders every report from a finished analysis and hands
//! the text to a [`ReportWriter`].

use tracing::{error, info};

use fa_analysis::{CarrierSummary, FreightAnalysis};
use fa_core::{Carriers, FreightEvent, NetworkGeometry, VehicleTypeCatalog};

use crate::render::{
    render_carrier_summary, render_general_stats, render_load_per_vehicle, render_load_summary,
    render_time_distance_per_vehicle, render_time_distance_per_vehicle_type,
};
use crate::row::{general_stats, load_rows, load_summary, vehicle_cost_rows, vehicle_type_cost_rows};
use crate::{OutputError, OutputResult, ReportFailure, ReportKind, ReportWriter};

/// Renders reports from the final state of one analysis run.
///
/// The emitter only reads; rendering the same kind twice gives identical text.
pub struct ReportEmitter<'r, 'a, C: VehicleTypeCatalog, N: NetworkGeometry> {
    analysis: &'r FreightAnalysis<'a, C, N>,
    carriers: CarrierSummary,
}

impl<'r, 'a, C: VehicleTypeCatalog, N: NetworkGeometry> ReportEmitter<'r, 'a, C, N> {
    pub fn new(analysis: &'r FreightAnalysis<'a, C, N>, carriers: &Carriers) -> Self {
        Self {
            analysis,
            carriers: CarrierSummary::from_carriers(carriers),
        }
    }

    /// Render one report.
    pub fn render(&self, kind: ReportKind) -> OutputResult<String> {
        let a = self.analysis;
        match kind {
            ReportKind::LoadPerVehicle => render_load_per_vehicle(&load_rows(a)?),
            ReportKind::LoadSummary => render_load_summary(&load_summary(&load_rows(a)?)?),
            ReportKind::TimeDistancePerVehicle => render_time_distance_per_vehicle(&vehicle_cost_rows(a)?),
            ReportKind::TimeDistancePerVehicleType => {
                render_time_distance_per_vehicle_type(&vehicle_type_cost_rows(a)?)
            }
            ReportKind::GeneralStats => render_general_stats(&general_stats(a, self.carriers)),
            ReportKind::CarrierSummary => render_carrier_summary(&self.carriers),
        }
    }

    /// Render and write every report.
    ///
    /// A report that fails does not stop the others.  Returns the number of
    /// reports written, or [`OutputError::Reports`] naming every failure.
    pub fn emit_all<W: ReportWriter>(&self, writer: &mut W) -> OutputResult<usize> {
        let mut written = 0;
        let mut failures = Vec::new();

        for kind in ReportKind::ALL {
            info!(report = %kind, "writing report");
            match self.render(kind).and_then(|text| writer.write_report(kind, &text)) {
                Ok(()) => written += 1,
                Err(e) => {
                    error!(report = %kind, error = %e, "report not written");
                    failures.push(ReportFailure { kind, error: e });
                }
            }
        }

        if failures.is_empty() {
            Ok(written)
        } else {
            Err(OutputError::Reports(failures))
        }
    }
}

/// Run a complete analysis: replay `events`, then emit every report.
///
/// A malformed stream fails before anything is written.
pub fn analyze_and_report<C, N, W>(
    events:   &[FreightEvent],
    catalog:  &C,
    network:  &N,
    carriers: &Carriers,
    writer:   &mut W,
) -> OutputResult<usize>
where
    C: VehicleTypeCatalog,
    N: NetworkGeometry,
    W: ReportWriter,
{
    let mut analysis = FreightAnalysis::new(catalog, network);
    analysis.run(events)?;
    ReportEmitter::new(&analysis, carriers).emit_all(writer)
}
