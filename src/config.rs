//! TOML configuration of the planner binary.
//!
//! ```toml
//! algorithm = "hill-climbing"
//! verbosity = "verbose"
//!
//! [grid]
//! rows = 10
//! cols = 10
//!
//! [search]
//! step_limit = 20
//! coin_reward = 5
//! trash_reward = 1
//! seed = 42
//! heuristic = "manhattan"
//! ```

use crate::search::{SearchConfig, SearchEngineName, Verbosity};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("grid dimensions must be non-zero, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },
}

/// Dimensions of a blank grid, used when no grid file is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { rows: 10, cols: 10 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub grid: GridConfig,
    pub search: SearchConfig,
    pub algorithm: SearchEngineName,
    pub verbosity: Verbosity,
}

impl Config {
    pub fn from_text(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        Self::from_text(&std::fs::read_to_string(path)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.rows == 0 || self.grid.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.grid.rows,
                cols: self.grid.cols,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{heuristics::HeuristicName, search_engines::DEFAULT_STEP_LIMIT};
    use std::io::Write;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_text("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.grid, GridConfig { rows: 10, cols: 10 });
        assert_eq!(config.search.step_limit, DEFAULT_STEP_LIMIT);
        assert_eq!(config.algorithm, SearchEngineName::AStar);
        assert_eq!(config.verbosity, Verbosity::Normal);
        assert_eq!(config.search.seed, None);
    }

    #[test]
    fn full_config() {
        let config = Config::from_text(
            r#"
            algorithm = "simulated-annealing"
            verbosity = "debug"

            [grid]
            rows = 4
            cols = 6

            [search]
            step_limit = 12
            coin_reward = 5
            trash_reward = -1
            seed = 42
            heuristic = "zero"
            "#,
        )
        .unwrap();
        assert_eq!(config.algorithm, SearchEngineName::SimulatedAnnealing);
        assert_eq!(config.verbosity, Verbosity::Debug);
        assert_eq!(config.grid, GridConfig { rows: 4, cols: 6 });
        assert_eq!(
            config.search,
            SearchConfig::new(12, 5, -1)
                .with_seed(42)
                .with_heuristic(HeuristicName::ZeroHeuristic)
        );
    }

    #[test]
    fn rejects_bad_configs() {
        assert!(matches!(
            Config::from_text("[grid]\nrows = 0"),
            Err(ConfigError::EmptyGrid { rows: 0, cols: 10 })
        ));
        assert!(matches!(
            Config::from_text("algorithm = \"dijkstra\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Config::from_text("[search]\nstep_limit = -3"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Config::from_text("[search]\nstep_limt = 3"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Config::from_path(Path::new("/definitely/not/here.toml")),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "algorithm = \"bfs\"\n[search]\nstep_limit = 7").unwrap();
        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.algorithm, SearchEngineName::Bfs);
        assert_eq!(config.search.step_limit, 7);
    }
}
