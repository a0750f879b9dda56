//! Run configuration loader.
//!
//! ```json
//! {
//!   "inputs": {
//!     "events": "events.csv",
//!     "vehicle_types": "vehicle_types.csv",
//!     "vehicles": "vehicles.csv",
//!     "links": "links.csv",
//!     "carriers": "carriers.json"
//!   },
//!   "output_dir": "analysis"
//! }
//! ```
//!
//! Relative paths are resolved against the directory holding the config file.

use std::io::Read;
use std::path::Path;

use fa_core::{AnalysisConfig, CoreError};

use crate::InputResult;

pub fn load_config(path: &Path) -> InputResult<AnalysisConfig> {
    let config = load_config_reader(std::fs::File::open(path)?)?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(resolve_relative(config, base))
}

/// Parse and validate a config without resolving its paths.
pub fn load_config_reader<R: Read>(reader: R) -> InputResult<AnalysisConfig> {
    let config: AnalysisConfig = serde_json::from_reader(reader)?;
    if config.output_dir.as_os_str().is_empty() {
        return Err(CoreError::Config("output_dir must not be empty".into()).into());
    }
    Ok(config)
}

/// Prefix every relative path in `config` with `base`.
pub fn resolve_relative(mut config: AnalysisConfig, base: &Path) -> AnalysisConfig {
    let inputs = &mut config.inputs;
    for path in [
        &mut inputs.events,
        &mut inputs.vehicle_types,
        &mut inputs.vehicles,
        &mut inputs.links,
        &mut inputs.carriers,
        &mut config.output_dir,
    ] {
        if path.is_relative() {
            *path = base.join(&*path);
        }
    }
    config
}
