//! `fa-output`: dashboard reports for the freight analysis workspace.
//!
//! | Report                        | File                              |
//! |-------------------------------|-----------------------------------|
//! | Load per vehicle              | `Load_perVehicle.csv`             |
//! | Load summary                  | `Load_summary.csv`                |
//! | Time, distance, cost / vehicle| `TimeDistance_perVehicle.csv`     |
//! | Time, distance, cost / type   | `TimeDistance_perVehicleType.csv` |
//! | General stats                 | `General_stats.csv`               |
//! | Carrier summary               | `summary.csv`                     |
//!
//! Rows are derived in [`row`], turned into text in [`render`], and persisted
//! by any [`ReportWriter`] (directory or in-memory).  [`ReportEmitter`] ties
//! them together and keeps going when one report fails.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fa_output::{DirReportWriter, ReportEmitter};
//!
//! let mut analysis = FreightAnalysis::new(&catalog, &network);
//! analysis.run(&events)?;
//! let mut writer = DirReportWriter::new(Path::new("./output/analysis"))?;
//! ReportEmitter::new(&analysis, &carriers).emit_all(&mut writer)?;
//! ```

pub mod emitter;
pub mod error;
pub mod format;
pub mod render;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use emitter::{ReportEmitter, analyze_and_report};
pub use error::{OutputError, OutputResult, ReportFailure};
pub use report::ReportKind;
pub use row::{GeneralStats, LoadSummary, VehicleCostRow, VehicleLoadRow, VehicleTypeCostRow};
pub use writer::{DirReportWriter, MemoryReportWriter, ReportWriter};
