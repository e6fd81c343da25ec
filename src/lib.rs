#![warn(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unit_bindings)]
#![warn(unused_crate_dependencies)]
#![warn(unused_qualifications)]

// Crate dependencies used in binary but not in library. Unfortunately cargo
// does not yet allow specifying dependencies for binaries only.
use humantime as _;
use tracing_subscriber as _;

pub mod agent;
pub mod config;
pub mod grid;
pub mod search;

#[cfg(test)]
mod test_utils;

pub use agent::{Agent, AgentError};
pub use config::{Config, ConfigError, GridConfig};
pub use grid::{Cell, GameObject, Grid, StateSpace};
pub use search::{Path, SearchConfig, SearchEngine, SearchEngineName, SearchPlanner};
