//! Configuration loading and typed config structures for a simulation.
//!
//! Configuration is a small YAML document describing the board and how to
//! seed it. Every field has a default, so an empty document is valid:
//!
//! ```yaml
//! board:
//!   height: 50
//!   width: 50
//! seed:
//!   rng_seed: 42
//!   alive_probability: 0.5
//!   pattern: glider          # optional; replaces random seeding
//!   pattern_origin: { row: 1, col: 1 }
//! ```

use std::path::Path;

use life_board::{Coordinate, Pattern, seed};
use serde::Deserialize;
use tracing::debug;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but describes an impossible simulation.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// Board dimensions.
    #[serde(default)]
    pub board: BoardConfig,

    /// Initial population.
    #[serde(default)]
    pub seed: SeedConfig,
}

impl SimulationConfig {
    /// Load and validate configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if it is not valid YAML, or
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "Loading simulation config");
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        debug!(
            height = config.board.height,
            width = config.board.width,
            pattern = config.seed.pattern.as_deref(),
            "Simulation config parsed"
        );
        Ok(config)
    }

    /// Check that the configuration describes a buildable simulation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for zero dimensions, an alive
    /// probability outside `[0, 1]`, an unknown pattern name, or a pattern
    /// that does not fit entirely on the board at its origin.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.height == 0 || self.board.width == 0 {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "board dimensions must be positive, got {}x{}",
                    self.board.height, self.board.width
                ),
            });
        }
        if !(0.0..=1.0).contains(&self.seed.alive_probability) {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "alive_probability must be within [0, 1], got {}",
                    self.seed.alive_probability
                ),
            });
        }
        if let Some(name) = &self.seed.pattern {
            let Some(pattern) = Pattern::by_name(name) else {
                return Err(ConfigError::Invalid {
                    reason: format!("unknown pattern `{name}`"),
                });
            };
            let origin = self.seed.pattern_origin;
            let (rows, cols) = pattern.extent();
            let fits_rows = origin
                .row()
                .checked_add(rows)
                .is_some_and(|end| end <= self.board.height);
            let fits_cols = origin
                .col()
                .checked_add(cols)
                .is_some_and(|end| end <= self.board.width);
            if !(fits_rows && fits_cols) {
                return Err(ConfigError::Invalid {
                    reason: format!(
                        "pattern `{name}` ({rows}x{cols}) at {origin} does not fit the {}x{} board",
                        self.board.height, self.board.width
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Board dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoardConfig {
    /// Number of rows.
    #[serde(default = "default_dimension")]
    pub height: usize,

    /// Number of columns.
    #[serde(default = "default_dimension")]
    pub width: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            height: default_dimension(),
            width: default_dimension(),
        }
    }
}

/// How the initial population is chosen.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedConfig {
    /// Seed for the random number generator used by random seeding.
    #[serde(default = "default_rng_seed")]
    pub rng_seed: u64,

    /// Chance that each cell starts alive under random seeding.
    #[serde(default = "default_alive_probability")]
    pub alive_probability: f64,

    /// Name of a built-in pattern. When set, only the pattern's cells start
    /// alive and random seeding is skipped.
    #[serde(default)]
    pub pattern: Option<String>,

    /// Top-left corner of the pattern on the board.
    #[serde(default = "default_pattern_origin")]
    pub pattern_origin: Coordinate,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            rng_seed: default_rng_seed(),
            alive_probability: default_alive_probability(),
            pattern: None,
            pattern_origin: default_pattern_origin(),
        }
    }
}

const fn default_dimension() -> usize {
    50
}

const fn default_rng_seed() -> u64 {
    42
}

const fn default_alive_probability() -> f64 {
    seed::DEFAULT_ALIVE_PROBABILITY
}

const fn default_pattern_origin() -> Coordinate {
    Coordinate::new(0, 0)
}
