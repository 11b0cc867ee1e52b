use rand::Rng;

use super::grid::{Grid, GridCoordinate};

/// The food the snake grows from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    position: GridCoordinate,
}

impl Apple {
    /// Place a new apple on a random cell
    pub fn new<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        Self {
            position: grid.random_cell(rng),
        }
    }

    /// Move to a fresh random cell.
    ///
    /// The snake's body is not avoided, so the apple can land underneath it.
    pub fn relocate<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) {
        self.position = grid.random_cell(rng);
    }

    pub fn position(&self) -> GridCoordinate {
        self.position
    }

    #[cfg(test)]
    pub(crate) fn place_at(&mut self, position: GridCoordinate) {
        self.position = position;
    }
}
