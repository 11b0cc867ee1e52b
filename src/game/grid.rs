use rand::Rng;
use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoordinate {
    pub x: i32,
    pub y: i32,
}

impl GridCoordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta, without wrapping
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Maps any integer into `[0, dimension)`, re-entering from the opposite edge.
///
/// `dimension` must be positive; [`GameConfig::validate`](super::GameConfig::validate)
/// guarantees that for every grid built by the engine.
pub fn wrap(value: i32, dimension: i32) -> i32 {
    value.rem_euclid(dimension)
}

/// Toroidal grid of `width` x `height` cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    /// Both dimensions must be positive.
    pub(crate) fn new(width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self { width, height }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, pos: GridCoordinate) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    /// Wrap each axis of `pos` independently
    pub fn wrap_position(&self, pos: GridCoordinate) -> GridCoordinate {
        GridCoordinate::new(wrap(pos.x, self.width), wrap(pos.y, self.height))
    }

    /// The neighbouring cell of `pos` in `direction`
    pub fn step(&self, pos: GridCoordinate, direction: Direction) -> GridCoordinate {
        let (dx, dy) = direction.delta();
        self.wrap_position(pos.moved_by(dx, dy))
    }

    /// Uniform random cell. Occupancy is not considered.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> GridCoordinate {
        GridCoordinate::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }

    pub fn center(&self) -> GridCoordinate {
        GridCoordinate::new(self.width / 2, self.height / 2)
    }
}
