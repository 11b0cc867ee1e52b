use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::error::ConfigError;

/// Largest accepted grid width or height, in cells
pub const MAX_GRID_DIMENSION: usize = 4096;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Terminal columns used to draw one cell
    pub cell_size: u16,
    /// Simulation ticks per second
    pub ticks_per_second: u32,
    /// RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 32,
            grid_height: 24,
            cell_size: 2,
            ticks_per_second: 10,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Fix the RNG seed for a reproducible run
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject configurations the engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_axis("width", self.grid_width)?;
        check_axis("height", self.grid_height)?;
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }

    /// Time between two ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }
}

fn check_axis(axis: &'static str, value: usize) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::EmptyAxis { axis });
    }
    if value > MAX_GRID_DIMENSION {
        return Err(ConfigError::AxisTooLarge {
            axis,
            value,
            max: MAX_GRID_DIMENSION,
        });
    }
    Ok(())
}
