use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0. Never empty.
    body: Vec<Position>,
    /// Direction the next tick will move in
    direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction.
    /// Extra segments are laid out behind the head.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        let (dx, dy) = direction.delta();
        let (back_dx, back_dy) = (-dx, -dy);

        for i in 1..length.max(1) {
            let prev = body[i - 1];
            body.push(prev.moved_by(back_dx, back_dy));
        }

        Self { body, direction }
    }

    /// Build a snake from explicit segments, head first.
    /// Returns `None` for an empty body.
    pub fn from_segments(body: Vec<Position>, direction: Direction) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        Some(Self { body, direction })
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// All segments, head first
    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Check if any segment, head included, sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Change direction unless the request is the exact opposite of the
    /// current direction. Returns whether the direction was taken.
    pub fn turn(&mut self, requested: Direction) -> bool {
        if self.direction.is_opposite(requested) {
            return false;
        }
        self.direction = requested;
        true
    }

    /// Move one cell in the current direction without growing.
    /// Returns the vacated tail cell.
    pub fn advance(&mut self) -> Position {
        let new_head = self.head().moved_in_direction(self.direction);
        self.body.insert(0, new_head);

        // The body held at least one segment before the insert
        self.body.pop().unwrap_or(new_head)
    }

    /// Re-attach a tail cell removed by `advance`, growing by one
    pub fn grow(&mut self, tail: Position) {
        self.body.push(tail);
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Whether the game is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Read-only view of everything the display needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<'a> {
    /// Segments head first. After a wall collision the head lies outside the grid.
    pub snake: &'a [Position],
    /// `None` only once the snake covers every cell
    pub food: Option<Position>,
    pub score: u32,
    pub high_score: u32,
    pub game_over: bool,
    pub grid_width: usize,
    pub grid_height: usize,
}

impl Snapshot<'_> {
    pub fn head(&self) -> Position {
        self.snake[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.segments()[1], Position::new(4, 5));
        assert_eq!(snake.tail(), Position::new(3, 5));

        let single = Snake::new(Position::new(1, 1), Direction::Up, 0);
        assert_eq!(single.len(), 1);
        assert_eq!(single.head(), single.tail());
    }

    #[test]
    fn test_from_segments_rejects_empty() {
        assert!(Snake::from_segments(Vec::new(), Direction::Up).is_none());
        let snake = Snake::from_segments(vec![Position::new(0, 0)], Direction::Up).unwrap();
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_snake_advance_and_grow() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        let vacated = snake.advance();
        assert_eq!(vacated, Position::new(3, 5));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));

        snake.grow(vacated);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), Position::new(3, 5));
    }

    #[test]
    fn test_turn_rejects_reversal() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert!(!snake.turn(Direction::Left));
        assert_eq!(snake.direction(), Direction::Right);

        assert!(snake.turn(Direction::Up));
        assert!(snake.turn(Direction::Up));
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn test_turn_compares_against_current_direction() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        // Two turns between moves: Left is no longer the reverse of Up
        assert!(snake.turn(Direction::Up));
        assert!(snake.turn(Direction::Left));
        assert_eq!(snake.direction(), Direction::Left);

        snake.advance();
        assert_eq!(snake.head(), Position::new(4, 5));
    }

    #[test]
    fn test_collision_detection() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert!(!snake.collides_with_body(Position::new(5, 5))); // head
        assert!(snake.collides_with_body(Position::new(4, 5))); // body
        assert!(!snake.collides_with_body(Position::new(10, 10))); // empty
        assert!(snake.occupies(Position::new(5, 5)));
    }
}
