use log::warn;
use ratatui::style::Color;

use crate::game::{Actor, NamedColor};

pub const INVALID_COLOR_NOTICE: &str = "Invalid color name! Using default color.";

pub fn to_terminal_color(color: NamedColor) -> Color {
    match color {
        NamedColor::Red => Color::Red,
        NamedColor::Green => Color::Green,
        NamedColor::Blue => Color::Blue,
        NamedColor::Yellow => Color::Yellow,
        NamedColor::Black => Color::Black,
        NamedColor::White => Color::White,
    }
}

/// Result of turning user input into a colour for an actor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorChoice {
    pub color: NamedColor,
    /// Set when the input was not a known name and the default was used
    pub notice: Option<&'static str>,
}

/// Parse a colour name, falling back to the actor's default on unknown input
pub fn resolve_color(input: &str, actor: Actor) -> ColorChoice {
    match input.parse::<NamedColor>() {
        Ok(color) => ColorChoice {
            color,
            notice: None,
        },
        Err(err) => {
            warn!("{}; {} falls back to {}", err, actor.label(), actor.default_color());
            ColorChoice {
                color: actor.default_color(),
                notice: Some(INVALID_COLOR_NOTICE),
            }
        }
    }
}
