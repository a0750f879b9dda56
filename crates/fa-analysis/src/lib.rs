//! `fa-analysis`: the event-driven aggregation engine.
//!
//! # One pass, two observers
//!
//! ```text
//! for event in stream (non-decreasing time, never re-sorted):
//!   LoadTracker: pickup / delivery  → per-vehicle cumulative load
//!   TourTracker: tour start / end   → per-vehicle tour duration
//!                link enter         → per-vehicle distance
//!                                   → per-type duration and distance sums
//! ```
//!
//! The two trackers share no mutable state.  [`FreightAnalysis`] owns both for
//! one run; the [`cost`] model and [`CarrierSummary`] are pure functions used
//! at report time.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Replays the stream through both trackers concurrently. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fa_analysis::FreightAnalysis;
//!
//! let mut analysis = FreightAnalysis::new(&catalog, &network);
//! analysis.run(&events)?;
//! let profile = analysis.load.load_profile(&"veh_1".into());
//! ```

pub mod analysis;
pub mod cost;
pub mod error;
pub mod load;
pub mod observer;
pub mod summary;
pub mod tour;


pub use analysis::FreightAnalysis;
pub use cost::{CostBreakdown, fleet_cost, vehicle_cost};
pub use error::{AnalysisError, AnalysisResult};
pub use load::LoadTracker;
pub use observer::{EventObserver, replay};
pub use summary::CarrierSummary;
pub use tour::{TourTracker, TypeTotals, VehicleAggregate};
