//! `lift-scenario` — everything that produces simulator input.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`loader`]   | `load_scenario_csv`, `load_scenario_reader`, `write_scenario_csv` |
//! | [`config`]   | `load_config_json`, `load_config_reader`                   |
//! | [`generate`] | `generate_free_for_all`, `generate_office_building`        |
//! | [`error`]    | `ScenarioError`, `ScenarioResult<T>`                       |
//!
//! Loaded data is always validated before it is returned; a scenario that
//! comes out of this crate can be handed straight to the simulation
//! builder.

pub mod config;
pub mod error;
pub mod generate;
pub mod loader;

#[cfg(test)]
mod tests;

pub use config::{load_config_json, load_config_reader};
pub use error::{ScenarioError, ScenarioResult};
pub use generate::{generate_free_for_all, generate_office_building, FreeForAllParams, OfficeParams};
pub use loader::{load_scenario_csv, load_scenario_reader, write_scenario_csv, write_scenario_writer};
