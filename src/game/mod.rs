//! Core game logic for Snake
//!
//! Everything here is free of I/O and rendering. The engine owns the snake and
//! the apple and advances them one tick at a time; front ends only feed it
//! direction intents and read back a [`GameSnapshot`].

pub mod apple;
pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod grid;
pub mod snake;
pub mod snapshot;

// Re-export commonly used types
pub use apple::Apple;
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use error::ConfigError;
pub use grid::{wrap, Grid, GridCoordinate};
pub use snake::Snake;
pub use snapshot::GameSnapshot;
