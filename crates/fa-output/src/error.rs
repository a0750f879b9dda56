//! Error types for fa-output.

use std::fmt;

use thiserror::Error;

use fa_analysis::AnalysisError;
use fa_core::VehicleId;

use crate::ReportKind;

/// Errors that can occur when rendering or persisting reports.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("vehicle {0} cannot be resolved to a vehicle type")]
    UnresolvedVehicleType(VehicleId),

    #[error("no data: {0}")]
    DegenerateAggregate(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("report is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("{} report(s) failed: {}", .0.len(), list(.0))]
    Reports(Vec<ReportFailure>),
}

/// One report that could not be rendered or written.
#[derive(Debug)]
pub struct ReportFailure {
    pub kind:  ReportKind,
    pub error: OutputError,
}

impl fmt::Display for ReportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.error)
    }
}

fn list(failures: &[ReportFailure]) -> String {
    failures.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
