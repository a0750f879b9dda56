//! Error type for building scenario collaborators.

use thiserror::Error;

use crate::{LinkId, VehicleTypeId};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("vehicle type {0} is not registered in the catalog")]
    UnknownVehicleType(VehicleTypeId),

    #[error("link {0} added twice to the network")]
    DuplicateLink(LinkId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `fa-core`.
pub type CoreResult<T> = Result<T, CoreError>;
