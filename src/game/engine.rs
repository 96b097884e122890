use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    config::GameConfig,
    direction::Direction,
    state::{CollisionType, GameStatus, Position, Snake, Snapshot},
};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision: Option<CollisionType>,
    /// The game was already over, nothing moved
    pub ignored: bool,
}

/// The single holder of game truth: snake, food, score and status.
///
/// `tick` is meant to be called on a fixed schedule and `set_direction`
/// whenever a movement key arrives. Both must run on the same task, or be
/// serialized by the caller.
pub struct GameState {
    config: GameConfig,
    snake: Snake,
    food: Option<Position>,
    score: u32,
    high_score: u32,
    status: GameStatus,
    rng: StdRng,
}

impl GameState {
    /// Create a new game seeded from system entropy
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a new game with deterministic food placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let snake = Snake::new(config.start, Direction::Right, 1);
        let mut state = Self {
            config,
            snake,
            food: None,
            score: 0,
            high_score: 0,
            status: GameStatus::Running,
            rng,
        };
        state.food = state.initial_food();
        state
    }

    /// Replace the snake and food, e.g. to set up a specific board.
    /// The status goes back to running; scores are left alone.
    pub fn place(&mut self, snake: Snake, food: Option<Position>) {
        self.snake = snake;
        self.food = food;
        self.status = GameStatus::Running;
    }

    /// Advance the simulation by one step
    pub fn tick(&mut self) -> TickOutcome {
        if self.status == GameStatus::GameOver {
            return TickOutcome {
                ignored: true,
                ..Default::default()
            };
        }

        let vacated = self.snake.advance();
        let head = self.snake.head();

        if let Some(collision) = self.check_collision(head) {
            info!(
                "game over: {:?} at ({}, {}), score {}",
                collision, head.x, head.y, self.score
            );
            self.status = GameStatus::GameOver;
            return TickOutcome {
                collision: Some(collision),
                ..Default::default()
            };
        }

        let ate_food = self.food == Some(head);
        if ate_food {
            self.snake.grow(vacated);
            self.score += self.config.score_increment;
            self.high_score = self.high_score.max(self.score);
            self.food = self.spawn_food_avoid_snake();
            debug!(
                "food eaten, score {} (high {}), length {}",
                self.score,
                self.high_score,
                self.snake.len()
            );
        }

        TickOutcome {
            ate_food,
            ..Default::default()
        }
    }

    /// Request a new movement direction.
    ///
    /// Ignored while the game is over and when the request would reverse the
    /// snake. Returns whether the direction was accepted.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if self.status == GameStatus::GameOver {
            return false;
        }
        self.snake.turn(requested)
    }

    /// Start a fresh game, keeping the high score
    pub fn restart(&mut self) {
        self.snake = Snake::new(self.config.start, Direction::Right, 1);
        self.score = 0;
        self.status = GameStatus::Running;
        self.food = self.initial_food();
        info!("game restarted, high score {}", self.high_score);
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            snake: self.snake.segments(),
            food: self.food,
            score: self.score,
            high_score: self.high_score,
            game_over: self.is_game_over(),
            grid_width: self.config.grid_width,
            grid_height: self.config.grid_height,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Position> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Check if the moved head causes a collision
    fn check_collision(&self, head: Position) -> Option<CollisionType> {
        if !self.config.contains(head) {
            return Some(CollisionType::Wall);
        }

        if self.snake.collides_with_body(head) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// The configured first food cell if usable, otherwise a random free cell
    fn initial_food(&mut self) -> Option<Position> {
        let preferred = self.config.start_food;
        if self.config.contains(preferred) && !self.snake.occupies(preferred) {
            return Some(preferred);
        }
        self.spawn_food_avoid_snake()
    }

    /// Spawn food at a uniformly random empty cell, `None` when the board is full
    fn spawn_food_avoid_snake(&mut self) -> Option<Position> {
        let occupied = self
            .snake
            .segments()
            .iter()
            .filter(|pos| self.config.contains(**pos))
            .count();
        if occupied >= self.config.cell_count() {
            debug!("no free cell left for food");
            return None;
        }

        loop {
            let x = self.rng.gen_range(0..self.config.grid_width) as i32;
            let y = self.rng.gen_range(0..self.config.grid_height) as i32;
            let pos = Position::new(x, y);

            if !self.snake.occupies(pos) {
                debug!("food spawned at ({}, {})", pos.x, pos.y);
                return Some(pos);
            }
        }
    }
}
