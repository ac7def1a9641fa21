//! JSON elevator configuration.
//!
//! ```json
//! {
//!   "initial_floor": 1,
//!   "ascend_secs_per_floor": 3.0,
//!   "descend_secs_per_floor": 4.0,
//!   "door_open_secs": 5.0,
//!   "door_close_secs": 6.0,
//!   "max_floor": 20
//! }
//! ```
//!
//! `min_floor` is optional and defaults to 0.

use std::io::Read;
use std::path::Path;

use lift_core::ElevatorConfig;

use crate::ScenarioResult;

/// Load and validate an [`ElevatorConfig`] from a JSON file.
pub fn load_config_json(path: &Path) -> ScenarioResult<ElevatorConfig> {
    let file = std::fs::File::open(path)?;
    load_config_reader(std::io::BufReader::new(file))
}

/// Like [`load_config_json`] but accepts any `Read` source.
pub fn load_config_reader<R: Read>(reader: R) -> ScenarioResult<ElevatorConfig> {
    let config: ElevatorConfig = serde_json::from_reader(reader)?;
    config.validate()?;
    log::debug!(
        "loaded elevator config: floors {}..={}, initial {}",
        config.min_floor.0, config.max_floor.0, config.initial_floor.0
    );
    Ok(config)
}
