//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The interactive mode drives it from a timer and forwards key presses to it.

pub mod config;
pub mod direction;
pub mod engine;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameState, TickOutcome};
pub use session::{Actor, NamedColor, Session};
pub use state::{CollisionType, GameStatus, Position, Snake, Snapshot};
