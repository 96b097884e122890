pub mod buttons;
pub mod handler;
pub mod prompt;

pub use buttons::{Button, ButtonBar};
pub use handler::{InputHandler, KeyAction};
pub use prompt::{ColorPrompt, PromptEvent};
