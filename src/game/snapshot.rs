use serde::{Deserialize, Serialize};

use super::grid::GridCoordinate;

/// Read-only view of one tick, handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Occupied cells, head first
    pub snake: Vec<GridCoordinate>,
    pub apple: GridCoordinate,
    pub grid_width: i32,
    pub grid_height: i32,
    /// Ticks completed so far
    pub tick: u64,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<GridCoordinate> {
        self.snake.first().copied()
    }

    pub fn snake_length(&self) -> usize {
        self.snake.len()
    }
}
