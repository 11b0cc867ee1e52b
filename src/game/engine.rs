use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use super::{
    apple::Apple,
    config::GameConfig,
    direction::Direction,
    error::ConfigError,
    grid::Grid,
    snake::Snake,
    snapshot::GameSnapshot,
};

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The head landed on the apple
    pub ate_apple: bool,
    /// The head landed on the body and the snake was reset
    pub reset: bool,
    /// Body length right after the move, before any reset
    pub moved_length: usize,
}

/// The game engine that owns the snake and the apple and advances them
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    apple: Apple,
    rng: StdRng,
    ticks: u64,
}

impl GameEngine {
    /// Create a new game engine, rejecting an invalid configuration
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        // validate() caps both axes well below i32::MAX
        let grid = Grid::new(config.grid_width as i32, config.grid_height as i32);
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let snake = Snake::new(grid.center());
        let apple = Apple::new(&grid, &mut rng);

        info!(
            width = grid.width(),
            height = grid.height(),
            seed = ?config.seed,
            "game engine initialised"
        );

        Ok(Self {
            config,
            grid,
            snake,
            apple,
            rng,
            ticks: 0,
        })
    }

    /// Queue a turn for the next tick, subject to the reversal rule
    pub fn buffer_direction(&mut self, direction: Direction) {
        self.snake.buffer_direction(direction);
    }

    /// Execute one step of the game.
    ///
    /// Order is fixed: buffer `intent`, apply the pending turn, move, eat,
    /// then check for self-collision.
    pub fn tick(&mut self, intent: Option<Direction>) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if let Some(direction) = intent {
            self.snake.buffer_direction(direction);
        }
        self.snake.apply_pending_direction();
        self.snake.move_snake(&self.grid);
        outcome.moved_length = self.snake.len();

        if self.snake.head() == self.apple.position() {
            self.snake.grow();
            self.apple.relocate(&self.grid, &mut self.rng);
            outcome.ate_apple = true;
            debug!(
                tick = self.ticks,
                target_length = self.snake.target_length(),
                apple_x = self.apple.position().x,
                apple_y = self.apple.position().y,
                "apple eaten"
            );
        }

        if self.snake.collides_with_self() {
            let restart = self.grid.random_cell(&mut self.rng);
            self.snake.reset(restart);
            outcome.reset = true;
            debug!(
                tick = self.ticks,
                length = outcome.moved_length,
                restart_x = restart.x,
                restart_y = restart.y,
                "snake hit itself, resetting"
            );
        }

        self.ticks += 1;
        outcome
    }

    /// Copy out the state the renderer needs
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            snake: self.snake.body().iter().copied().collect(),
            apple: self.apple.position(),
            grid_width: self.grid.width(),
            grid_height: self.grid.height(),
            tick: self.ticks,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Ticks completed since the engine was created
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GridCoordinate;

    fn engine_with(width: usize, height: usize) -> GameEngine {
        GameEngine::new(GameConfig::new(width, height).with_seed(0x5EED)).unwrap()
    }

    /// Park the snake somewhere specific and keep the apple out of its path
    fn place(engine: &mut GameEngine, head: GridCoordinate, apple: GridCoordinate) {
        engine.snake.reset(head);
        engine.apple.place_at(apple);
    }

    #[test]
    fn test_new_engine() {
        let engine = engine_with(32, 24);
        assert_eq!(engine.snake().len(), 1);
        assert_eq!(engine.snake().head(), GridCoordinate::new(16, 12));
        assert_eq!(engine.snake().direction(), Direction::Right);
        assert!(engine.grid().contains(engine.apple().position()));
        assert_eq!(engine.ticks(), 0);
    }

    #[test]
    fn test_rejects_invalid_config() {
        assert!(matches!(
            GameEngine::new(GameConfig::new(0, 24)),
            Err(ConfigError::EmptyAxis { axis: "width" })
        ));
        assert!(GameEngine::new(GameConfig::new(32, 0)).is_err());
    }

    #[test]
    fn test_three_ticks_without_input() {
        let mut engine = engine_with(32, 24);
        place(&mut engine, GridCoordinate::new(5, 5), GridCoordinate::new(20, 20));

        let heads: Vec<_> = (0..3)
            .map(|_| {
                let outcome = engine.tick(None);
                assert!(!outcome.ate_apple);
                assert!(!outcome.reset);
                assert_eq!(outcome.moved_length, 1);
                assert_eq!(engine.snake().len(), 1);
                engine.snake().head()
            })
            .collect();

        assert_eq!(
            heads,
            vec![
                GridCoordinate::new(6, 5),
                GridCoordinate::new(7, 5),
                GridCoordinate::new(8, 5)
            ]
        );
        assert_eq!(engine.ticks(), 3);
    }

    #[test]
    fn test_wraps_at_right_edge() {
        let mut engine = engine_with(32, 24);
        place(&mut engine, GridCoordinate::new(31, 5), GridCoordinate::new(20, 20));

        engine.tick(None);

        assert_eq!(engine.snake().head(), GridCoordinate::new(0, 5));
    }

    #[test]
    fn test_intent_applies_same_tick() {
        let mut engine = engine_with(32, 24);
        place(&mut engine, GridCoordinate::new(5, 5), GridCoordinate::new(20, 20));

        engine.tick(Some(Direction::Down));

        assert_eq!(engine.snake().direction(), Direction::Down);
        assert_eq!(engine.snake().head(), GridCoordinate::new(5, 6));
    }

    #[test]
    fn test_reversal_intent_is_ignored() {
        let mut engine = engine_with(32, 24);
        place(&mut engine, GridCoordinate::new(5, 5), GridCoordinate::new(20, 20));

        engine.tick(Some(Direction::Left));

        assert_eq!(engine.snake().direction(), Direction::Right);
        assert_eq!(engine.snake().head(), GridCoordinate::new(6, 5));
    }

    #[test]
    fn test_last_buffered_direction_wins() {
        let mut engine = engine_with(32, 24);
        place(&mut engine, GridCoordinate::new(5, 5), GridCoordinate::new(20, 20));

        engine.buffer_direction(Direction::Up);
        engine.buffer_direction(Direction::Down);
        engine.tick(None);

        assert_eq!(engine.snake().head(), GridCoordinate::new(5, 6));
    }

    #[test]
    fn test_eating_grows_on_next_move_and_relocates_apple() {
        let mut engine = engine_with(32, 24);
        place(&mut engine, GridCoordinate::new(5, 5), GridCoordinate::new(6, 5));

        // Predict where the relocated apple lands from a clone of the RNG
        let mut expected_rng = engine.rng.clone();
        let expected_apple = engine.grid.random_cell(&mut expected_rng);

        let outcome = engine.tick(None);
        assert!(outcome.ate_apple);
        assert!(!outcome.reset);
        assert_eq!(engine.snake().len(), 1);
        assert_eq!(engine.snake().target_length(), 2);
        assert_eq!(engine.apple().position(), expected_apple);

        engine.apple.place_at(GridCoordinate::new(20, 20));
        engine.tick(None);
        assert_eq!(engine.snake().len(), 2);
        assert_eq!(
            engine.snapshot().snake,
            vec![GridCoordinate::new(7, 5), GridCoordinate::new(6, 5)]
        );
    }

    #[test]
    fn test_self_collision_resets_same_tick() {
        let mut engine = engine_with(32, 24);
        place(&mut engine, GridCoordinate::new(5, 5), GridCoordinate::new(20, 20));
        for _ in 0..4 {
            engine.snake.grow();
        }
        for _ in 0..4 {
            engine.tick(None);
        }
        assert_eq!(engine.snake().len(), 5);

        engine.tick(Some(Direction::Down));
        engine.tick(Some(Direction::Left));

        let mut expected_rng = engine.rng.clone();
        let expected_restart = engine.grid.random_cell(&mut expected_rng);
        let apple_before = engine.apple().position();

        let outcome = engine.tick(Some(Direction::Up));

        assert!(outcome.reset);
        assert!(!outcome.ate_apple);
        assert_eq!(outcome.moved_length, 5);
        assert_eq!(engine.snake().len(), 1);
        assert_eq!(engine.snake().target_length(), 1);
        assert_eq!(engine.snake().direction(), Direction::Right);
        assert_eq!(engine.snake().head(), expected_restart);
        assert_eq!(engine.apple().position(), apple_before);
    }

    #[test]
    fn test_head_stays_on_grid() {
        let mut engine = engine_with(3, 2);
        let turns = [
            Some(Direction::Up),
            None,
            Some(Direction::Left),
            None,
            Some(Direction::Down),
            Some(Direction::Right),
        ];
        for turn in turns.iter().cycle().take(200) {
            engine.tick(*turn);
            assert!(engine.grid().contains(engine.snake().head()));
            assert!(engine.grid().contains(engine.apple().position()));
        }
    }

    #[test]
    fn test_seeded_engines_are_deterministic() {
        let mut a = engine_with(12, 9);
        let mut b = engine_with(12, 9);
        for i in 0..300 {
            let intent = Direction::ALL.get(i % 7).copied();
            assert_eq!(a.tick(intent), b.tick(intent));
            assert_eq!(a.snapshot(), b.snapshot());
        }
    }

    #[test]
    fn test_snapshot() {
        let mut engine = engine_with(32, 24);
        place(&mut engine, GridCoordinate::new(1, 1), GridCoordinate::new(9, 9));
        engine.tick(None);

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.snake, vec![GridCoordinate::new(2, 1)]);
        assert_eq!(snapshot.head(), Some(GridCoordinate::new(2, 1)));
        assert_eq!(snapshot.apple, GridCoordinate::new(9, 9));
        assert_eq!(snapshot.grid_width, 32);
        assert_eq!(snapshot.grid_height, 24);
        assert_eq!(snapshot.tick, 1);
    }
}
