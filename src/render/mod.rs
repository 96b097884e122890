pub mod palette;
pub mod renderer;

pub use palette::{ColorChoice, resolve_color, to_terminal_color};
pub use renderer::{Overlay, Renderer, ScreenLayout};
