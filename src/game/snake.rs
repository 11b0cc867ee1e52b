use std::collections::VecDeque;

use super::direction::Direction;
use super::grid::{Grid, GridCoordinate};

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: VecDeque<GridCoordinate>,
    /// Current direction of movement
    direction: Direction,
    /// One-slot mailbox for the next turn, overwritten by later requests
    pending_direction: Option<Direction>,
    /// Length the body is trimmed or extended toward on each move
    target_length: usize,
}

impl Snake {
    /// Create a single-segment snake at `position` heading right
    pub fn new(position: GridCoordinate) -> Self {
        Self {
            body: VecDeque::from([position]),
            direction: Direction::Right,
            pending_direction: None,
            target_length: 1,
        }
    }

    /// Buffer a turn for the next move.
    ///
    /// A request that would reverse the current direction is dropped. Only the
    /// last accepted request before [`Snake::apply_pending_direction`] survives.
    pub fn buffer_direction(&mut self, requested: Direction) {
        if !self.direction.is_opposite(requested) {
            self.pending_direction = Some(requested);
        }
    }

    /// Promote the buffered turn, if any, to the current direction
    pub fn apply_pending_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    /// Advance one cell in the current direction, wrapping at the grid edges.
    ///
    /// The tail is dropped only while the body is longer than the target
    /// length, which is how growth becomes visible.
    pub fn move_snake(&mut self, grid: &Grid) {
        let new_head = grid.step(self.head(), self.direction);
        self.body.push_front(new_head);

        if self.body.len() > self.target_length {
            self.body.pop_back();
        }
    }

    /// Register one extra segment, realised by the next move
    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// Get the head position
    pub fn head(&self) -> GridCoordinate {
        // body is never empty: it starts with one cell and move pushes before it pops
        self.body[0]
    }

    /// Check whether the head overlaps any other segment
    pub fn collides_with_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Collapse back to a single segment at `position`
    pub fn reset(&mut self, position: GridCoordinate) {
        self.body.clear();
        self.body.push_back(position);
        self.target_length = 1;
        self.direction = Direction::Right;
        self.pending_direction = None;
    }

    pub fn body(&self) -> &VecDeque<GridCoordinate> {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true for a snake built through `new` or `reset`
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
