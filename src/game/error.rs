use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a [`GameConfig`](super::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid {axis} must be at least one cell")]
    EmptyAxis { axis: &'static str },
    #[error("grid {axis} of {value} cells exceeds the maximum of {max}")]
    AxisTooLarge {
        axis: &'static str,
        value: usize,
        max: usize,
    },
    #[error("cell_size must be non-zero")]
    ZeroCellSize,
    #[error("ticks_per_second must be non-zero")]
    ZeroTickRate,
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
