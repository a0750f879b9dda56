//! freight_dashboard: runs the freight analysis and writes the dashboard
//! reports.
//!
//! ```text
//! freight_dashboard                 # built-in two-carrier scenario
//! freight_dashboard run/config.json # scenario described by a config file
//! ```
//!
//! Set `RUST_LOG=debug` for per-event diagnostics.

mod scenario;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fa_analysis::FreightAnalysis;
use fa_input::{Scenario, load_config};
use fa_output::row::{load_rows, vehicle_cost_rows};
use fa_output::{DirReportWriter, OutputError, ReportEmitter, ReportKind, VehicleCostRow, VehicleLoadRow};

const DEFAULT_OUTPUT_DIR: &str = "output/freight_dashboard";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1. Load the scenario.
    let (scenario, output_dir) = match std::env::args().nth(1) {
        Some(path) => {
            let config = load_config(Path::new(&path)).with_context(|| format!("reading config {path}"))?;
            let scenario = Scenario::load(&config.inputs).context("loading scenario")?;
            (scenario, config.output_dir)
        }
        None => (scenario::built_in()?, PathBuf::from(DEFAULT_OUTPUT_DIR)),
    };
    println!("=== freight_dashboard ===");
    println!(
        "Events: {}  |  Vehicles: {}  |  Links: {}  |  Carriers: {}",
        scenario.events.len(),
        scenario.catalog.vehicle_count(),
        scenario.network.link_count(),
        scenario.carriers.len(),
    );
    println!();

    // 2. Replay the event stream.
    let t0 = Instant::now();
    let mut analysis = FreightAnalysis::new(&scenario.catalog, &scenario.network);
    analysis.run(&scenario.events).context("event stream rejected")?;
    println!("Analysis complete in {:.3} s", t0.elapsed().as_secs_f64());

    // 3. Write reports.  Every report is attempted; failures are returned at the end.
    let mut writer = DirReportWriter::new(&output_dir)?;
    let failures = match ReportEmitter::new(&analysis, &scenario.carriers).emit_all(&mut writer) {
        Ok(n) => {
            info!(reports = n, dir = %output_dir.display(), "reports written");
            Vec::new()
        }
        Err(OutputError::Reports(failures)) => failures,
        Err(e) => return Err(e.into()),
    };
    for kind in ReportKind::ALL {
        if failures.iter().all(|f| f.kind != kind) {
            println!("  {}", writer.path_of(kind).display());
        }
    }
    println!();

    // 4. Per-vehicle overview.
    match (load_rows(&analysis), vehicle_cost_rows(&analysis)) {
        (Ok(loads), Ok(costs)) => print_overview(&loads, &costs),
        (Err(e), _) | (_, Err(e)) => println!("Per-vehicle overview unavailable: {e}"),
    }

    if !failures.is_empty() {
        return Err(OutputError::Reports(failures).into());
    }
    Ok(())
}

fn print_overview(loads: &[VehicleLoadRow], costs: &[VehicleCostRow]) {
    println!("{:<10} {:<12} {:>8} {:>10} {:>10}", "Vehicle", "Type", "MaxLoad", "Dur[s]", "Cost[EUR]");
    println!("{}", "-".repeat(54));
    for row in costs {
        let max_load = loads
            .iter()
            .find(|l| l.vehicle == row.vehicle)
            .map_or_else(|| "-".to_owned(), |l| l.max_load.to_string());
        println!(
            "{:<10} {:<12} {:>8} {:>10.0} {:>10.2}",
            row.vehicle.as_str(),
            row.vehicle_type.as_str(),
            max_load,
            row.duration_s,
            row.cost.total_cost,
        );
    }
}
