//! The reports this crate produces.

use std::fmt;

/// One dashboard report.  Each kind is rendered and persisted independently.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ReportKind {
    LoadPerVehicle,
    LoadSummary,
    TimeDistancePerVehicle,
    TimeDistancePerVehicleType,
    GeneralStats,
    CarrierSummary,
}

impl ReportKind {
    /// Emission order.
    pub const ALL: [ReportKind; 6] = [
        ReportKind::LoadPerVehicle,
        ReportKind::LoadSummary,
        ReportKind::TimeDistancePerVehicle,
        ReportKind::TimeDistancePerVehicleType,
        ReportKind::GeneralStats,
        ReportKind::CarrierSummary,
    ];

    /// File name the dashboard expects.
    pub fn file_name(self) -> &'static str {
        match self {
            ReportKind::LoadPerVehicle             => "Load_perVehicle.csv",
            ReportKind::LoadSummary                => "Load_summary.csv",
            ReportKind::TimeDistancePerVehicle     => "TimeDistance_perVehicle.csv",
            ReportKind::TimeDistancePerVehicleType => "TimeDistance_perVehicleType.csv",
            ReportKind::GeneralStats               => "General_stats.csv",
            ReportKind::CarrierSummary             => "summary.csv",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
