//! Presentation choices that live for the whole process: who is playing and
//! how the snake and food are coloured. The game logic never reads these.

use anyhow::bail;
use std::fmt;
use std::str::FromStr;

/// A colour the player can pick by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Red,
    Green,
    Blue,
    Yellow,
    Black,
    White,
}

impl NamedColor {
    pub const ALL: [NamedColor; 6] = [
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Blue,
        NamedColor::Yellow,
        NamedColor::Black,
        NamedColor::White,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Blue => "blue",
            NamedColor::Yellow => "yellow",
            NamedColor::Black => "black",
            NamedColor::White => "white",
        }
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedColor {
    type Err = anyhow::Error;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        match NamedColor::ALL.iter().find(|c| c.name() == wanted) {
            Some(color) => Ok(*color),
            None => bail!("unknown color name: {:?}", s.trim()),
        }
    }
}

/// Which on-screen actor a colour applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Snake,
    Food,
}

impl Actor {
    pub fn default_color(&self) -> NamedColor {
        match self {
            Actor::Snake => NamedColor::Green,
            Actor::Food => NamedColor::Red,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Actor::Snake => "snake",
            Actor::Food => "food",
        }
    }
}

/// Player name and colours handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub player_name: String,
    pub snake_color: NamedColor,
    pub food_color: NamedColor,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            snake_color: Actor::Snake.default_color(),
            food_color: Actor::Food.default_color(),
        }
    }
}

impl Session {
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            ..Default::default()
        }
    }

    pub fn color_of(&self, actor: Actor) -> NamedColor {
        match actor {
            Actor::Snake => self.snake_color,
            Actor::Food => self.food_color,
        }
    }

    pub fn set_color(&mut self, actor: Actor, color: NamedColor) {
        match actor {
            Actor::Snake => self.snake_color = color,
            Actor::Food => self.food_color = color,
        }
    }
}
