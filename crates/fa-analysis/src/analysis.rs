//! `FreightAnalysis`: the per-run aggregation context.

use tracing::info;

use fa_core::{FreightEvent, NetworkGeometry, VehicleTypeCatalog};

use crate::{AnalysisResult, LoadTracker, TourTracker};

/// Owns the trackers of one analysis run.
///
/// Create one per run, call [`run`][Self::run] once with the full event
/// stream, then hand it to the report emitter.  Nothing is shared between
/// runs.
pub struct FreightAnalysis<'a, C: VehicleTypeCatalog, N: NetworkGeometry> {
    pub load:  LoadTracker,
    pub tours: TourTracker<'a, C, N>,
    events:    usize,
}

impl<'a, C: VehicleTypeCatalog, N: NetworkGeometry> FreightAnalysis<'a, C, N> {
    pub fn new(catalog: &'a C, network: &'a N) -> Self {
        Self {
            load:   LoadTracker::new(),
            tours:  TourTracker::new(catalog, network),
            events: 0,
        }
    }

    /// Replay `events` through both trackers.
    ///
    /// Without the `parallel` feature both trackers are driven by one
    /// sequential pass.  With it, each tracker replays the slice on its own
    /// Rayon task; if both fail, the load tracker's error is returned.
    pub fn run(&mut self, events: &[FreightEvent]) -> AnalysisResult<()> {
        info!(events = events.len(), "replaying event stream");

        #[cfg(not(feature = "parallel"))]
        {
            use crate::EventObserver;

            for event in events {
                self.load.observe(event)?;
                self.tours.observe(event)?;
            }
            self.load.on_stream_end();
            self.tours.on_stream_end();
        }

        #[cfg(feature = "parallel")]
        {
            let load = &mut self.load;
            let tours = &mut self.tours;
            let (load_result, tour_result) = rayon::join(
                || crate::replay(events, load),
                || crate::replay(events, tours),
            );
            load_result?;
            tour_result?;
        }

        self.events += events.len();
        info!(
            vehicles_with_load = self.load.vehicle_count(),
            vehicles_with_tour = self.tours.toured_vehicles().count(),
            "event stream consumed"
        );
        Ok(())
    }

    /// Number of events consumed by successful runs.
    pub fn events_consumed(&self) -> usize {
        self.events
    }

    pub fn catalog(&self) -> &'a C {
        self.tours.catalog()
    }
}
