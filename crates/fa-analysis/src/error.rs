use fa_core::{CarrierId, LinkId, TourId, VehicleId};
use thiserror::Error;

/// Errors raised while consuming the event stream.
///
/// All of them mean the stream is malformed or out of order relative to the
/// scenario; none is silently defaulted.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("delivery for vehicle {vehicle} at t={time} has no prior pickup")]
    MissingPickup { vehicle: VehicleId, time: f64 },

    #[error("tour {tour} of carrier {carrier} ended at t={time} without a recorded start")]
    MissingTourStart {
        carrier: CarrierId,
        tour:    TourId,
        time:    f64,
    },

    #[error("vehicle {vehicle} entered link {link}, which is not in the network")]
    UnknownLink { vehicle: VehicleId, link: LinkId },
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
